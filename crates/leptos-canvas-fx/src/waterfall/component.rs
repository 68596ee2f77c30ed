use std::cell::RefCell;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use super::config::WaterfallConfig;
use super::render::paint_frame;
use super::simulation::WaterfallSim;
use crate::animation_loop::AnimationLoop;
use crate::canvas::{context_2d, sync_backing_store};

fn start_waterfall(
    canvas: HtmlCanvasElement,
    config: WaterfallConfig,
    flow: Signal<f64>,
) -> Result<AnimationLoop, JsValue> {
    let ctx = context_2d(&canvas)?;
    let (width, height) = sync_backing_store(&canvas, 1.0);
    let seed = js_sys::Date::now() as u64;
    let sim = Rc::new(RefCell::new(WaterfallSim::new(config, seed, width, height)));

    let on_resize = {
        let sim = Rc::clone(&sim);
        move || {
            let (w, h) = sync_backing_store(&canvas, 1.0);
            sim.borrow_mut().resize(w, h);
        }
    };

    let on_frame = move |time: f64| {
        let mut sim = sim.borrow_mut();
        sim.step();
        let flow = flow.try_get_untracked().unwrap_or(0.0);
        if let Err(err) = paint_frame(&ctx, &sim, time, flow) {
            log::debug!("waterfall paint failed: {:?}", err);
        }
    };

    AnimationLoop::start(on_frame, on_resize)
}

/// Full-size canvas running a waterfall particle effect.
///
/// `flow` (0..=1, usually derived from scroll position) brightens the
/// streams; it is read every frame and never restarts the animation.
#[component]
pub fn WaterfallCanvas(
    config: WaterfallConfig,
    #[prop(into)] flow: Signal<f64>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match start_waterfall(canvas, config.clone(), flow) {
            Ok(anim) => {
                let anim = StoredValue::new_local(anim);
                on_cleanup(move || {
                    anim.try_with_value(AnimationLoop::stop);
                });
            }
            Err(err) => log::warn!("waterfall not started: {:?}", err),
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class=class
            aria-hidden="true"
            style="width: 100%; height: 100%; display: block;"
        ></canvas>
    }
}
