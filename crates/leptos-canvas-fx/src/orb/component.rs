use std::cell::Cell;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};

use super::scene::{OrbScene, Orbit};
use crate::animation_loop::AnimationLoop;
use crate::canvas::{context_2d, device_pixel_ratio, sync_backing_store};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct DragState {
    orbit: Orbit,
    last: Option<(i32, i32)>,
}

fn paint_orb(
    ctx: &CanvasRenderingContext2d,
    scene: &OrbScene,
    t_secs: f64,
    orbit: Orbit,
    (w, h): (f64, f64),
    ratio: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_line_width(0.6);
    ctx.set_line_join("round");

    for face in scene.faces(t_secs, orbit, w, h) {
        let [(x0, y0), (x1, y1), (x2, y2)] = face.points;
        let [r, g, b] = face.rgb;
        let color = format!("rgb({}, {}, {})", r, g, b);
        ctx.begin_path();
        ctx.move_to(x0, y0);
        ctx.line_to(x1, y1);
        ctx.line_to(x2, y2);
        ctx.close_path();
        ctx.set_fill_style_str(&color);
        ctx.fill();
        // Same-colour outline hides anti-aliasing seams between faces
        ctx.set_stroke_style_str(&color);
        ctx.stroke();
    }
    Ok(())
}

fn start_orb(canvas: HtmlCanvasElement, drag: RwSignal<DragState>) -> Result<AnimationLoop, JsValue> {
    let ctx = context_2d(&canvas)?;
    let scene = OrbScene::default();
    let size = Rc::new(Cell::new((0.0, 0.0, 1.0)));

    let on_resize = {
        let size = Rc::clone(&size);
        move || {
            let ratio = device_pixel_ratio(1.0, 1.5);
            let (w, h) = sync_backing_store(&canvas, ratio);
            size.set((w, h, ratio));
        }
    };

    let on_frame = move |time: f64| {
        let (w, h, ratio) = size.get();
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let orbit = drag.try_get_untracked().unwrap_or_default().orbit;
        if let Err(err) = paint_orb(&ctx, &scene, time / 1000.0, orbit, (w, h), ratio) {
            log::debug!("orb paint failed: {:?}", err);
        }
    };

    AnimationLoop::start(on_frame, on_resize)
}

/// Floating, drag-to-orbit icosphere. No zoom, no pan.
#[component]
pub fn OrbCanvas(#[prop(optional, into)] class: String) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let drag = RwSignal::new(DragState::default());

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match start_orb(canvas, drag) {
            Ok(anim) => {
                let anim = StoredValue::new_local(anim);
                on_cleanup(move || {
                    anim.try_with_value(AnimationLoop::stop);
                });
            }
            Err(err) => log::warn!("orb not started: {:?}", err),
        }
    });

    let on_pointer_down = move |ev: PointerEvent| {
        drag.update(|d| d.last = Some((ev.client_x(), ev.client_y())));
    };
    let on_pointer_move = move |ev: PointerEvent| {
        let (x, y) = (ev.client_x(), ev.client_y());
        drag.update(|d| {
            if let Some((lx, ly)) = d.last {
                d.orbit = d.orbit.drag((x - lx) as f64, (y - ly) as f64);
                d.last = Some((x, y));
            }
        });
    };
    let on_pointer_up = move |_: PointerEvent| drag.update(|d| d.last = None);

    view! {
        <canvas
            node_ref=canvas_ref
            class=class
            style="width: 100%; height: 100%; display: block; touch-action: none; cursor: grab;"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_up
        ></canvas>
    }
}
