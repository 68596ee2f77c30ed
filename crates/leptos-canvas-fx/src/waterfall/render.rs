//! Paints a [`WaterfallSim`] onto a 2D canvas context.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::config::StreamStyle;
use super::simulation::WaterfallSim;

fn hsla(hue: f64, lightness: f64, alpha: f64) -> String {
    format!("hsla({:.0}, 100%, {:.0}%, {:.3})", hue, lightness, alpha.clamp(0.0, 1.0))
}

/// Draw one full frame. `time_ms` is the animation-frame timestamp and
/// `flow` the page's scroll flow in `[0, 1]`.
pub fn paint_frame(
    ctx: &CanvasRenderingContext2d,
    sim: &WaterfallSim,
    time_ms: f64,
    flow: f64,
) -> Result<(), JsValue> {
    let (w, h) = (sim.width(), sim.height());
    ctx.clear_rect(0.0, 0.0, w, h);

    paint_wash(ctx, sim)?;
    paint_streams(ctx, sim, time_ms * 0.001, flow);
    paint_ripples(ctx, sim)?;
    paint_particles(ctx, sim)?;
    paint_mist(ctx, sim)?;
    Ok(())
}

fn paint_wash(ctx: &CanvasRenderingContext2d, sim: &WaterfallSim) -> Result<(), JsValue> {
    let config = sim.config();
    let hue = config.hue + 10.0;
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, sim.height());
    gradient.add_color_stop(0.0, &hsla(hue, 60.0, config.wash_alpha[0]))?;
    gradient.add_color_stop(0.5, &hsla(hue, 60.0, config.wash_alpha[1]))?;
    gradient.add_color_stop(1.0, &hsla(hue, 60.0, config.wash_alpha[2]))?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, sim.width(), sim.height());
    Ok(())
}

fn paint_streams(ctx: &CanvasRenderingContext2d, sim: &WaterfallSim, t: f64, flow: f64) {
    let config = sim.config();
    let (w, h) = (sim.width(), sim.height());
    let hue = config.hue + 10.0;
    let strand_alpha = config.stream_alpha_at(flow);

    match config.stream_style {
        StreamStyle::Straight => {
            for i in 0..config.stream_count {
                let i = i as f64;
                let sway = (t + i).sin() * config.stream_sway;
                ctx.begin_path();
                ctx.move_to(w * (0.2 + i * 0.3) + sway, 0.0);
                ctx.line_to(w * (0.15 + i * 0.35) + sway * 0.5, h);
                ctx.set_stroke_style_str(&hsla(hue, 70.0, strand_alpha));
                ctx.set_line_width(config.stream_width);
                ctx.stroke();
            }
        }
        StreamStyle::Cascade => {
            let sway = t.sin() * 10.0;
            ctx.begin_path();
            ctx.move_to(w * 0.3 + sway, 0.0);
            ctx.bezier_curve_to(w * 0.35, h * 0.3, w * 0.45, h * 0.6, w * 0.4, h);
            ctx.set_stroke_style_str(&hsla(hue, 70.0, 0.4));
            ctx.set_line_width(15.0);
            ctx.stroke();

            for i in 0..config.stream_count {
                let i = i as f64;
                let sway = (t + i).sin() * config.stream_sway;
                let width = config.stream_width + (t * 2.0 + i).sin() * 2.0;
                ctx.begin_path();
                ctx.move_to(w * (0.4 + i * 0.1) + sway, 0.0);
                ctx.line_to(w * (0.35 + i * 0.15) + sway * 0.5, h);
                ctx.set_stroke_style_str(&hsla(hue, 70.0, strand_alpha));
                ctx.set_line_width(width);
                ctx.stroke();
            }
        }
    }
}

fn paint_ripples(ctx: &CanvasRenderingContext2d, sim: &WaterfallSim) -> Result<(), JsValue> {
    let config = sim.config();
    ctx.set_line_width(config.ripple_line_width);
    for ripple in sim.ripples() {
        if ripple.life <= 0.0 {
            continue;
        }
        ctx.begin_path();
        ctx.arc(ripple.x, ripple.y, ripple.radius, 0.0, TAU)?;
        ctx.set_stroke_style_str(&hsla(config.hue, 70.0, ripple.life * config.ripple_alpha));
        ctx.stroke();
    }
    Ok(())
}

fn paint_particles(ctx: &CanvasRenderingContext2d, sim: &WaterfallSim) -> Result<(), JsValue> {
    let config = sim.config();
    for p in sim.particles() {
        let trail_len = p.trail.len() as f64;
        for (i, &(x, y)) in p.trail.iter().enumerate() {
            let alpha = (i as f64 / trail_len) * p.life * 0.5;
            ctx.begin_path();
            ctx.arc(x, y, p.size * 0.5, 0.0, TAU)?;
            ctx.set_fill_style_str(&hsla(p.hue, 70.0, alpha));
            ctx.fill();
        }

        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size, 0.0, TAU)?;
        let gradient = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, p.size)?;
        gradient.add_color_stop(0.0, &hsla(p.hue, 90.0, p.life * config.core_alpha))?;
        gradient.add_color_stop(1.0, &hsla(p.hue, 60.0, p.life * config.rim_alpha))?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();
    }
    Ok(())
}

fn paint_mist(ctx: &CanvasRenderingContext2d, sim: &WaterfallSim) -> Result<(), JsValue> {
    let config = sim.config();
    let (w, h) = (sim.width(), sim.height());
    let cx = w * config.mist_center;
    let gradient = ctx.create_radial_gradient(cx, h, 0.0, cx, h, config.mist_radius)?;
    gradient.add_color_stop(0.0, &hsla(config.hue + 10.0, 70.0, config.mist_alpha))?;
    gradient.add_color_stop(1.0, &hsla(config.hue + 10.0, 70.0, 0.0))?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, h - config.mist_band, w, config.mist_band);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::hsla;

    #[test]
    fn test_hsla_clamps_alpha() {
        assert_eq!(hsla(200.0, 70.0, 1.7), "hsla(200, 100%, 70%, 1.000)");
        assert_eq!(hsla(210.4, 60.0, -0.2), "hsla(210, 100%, 60%, 0.000)");
    }
}
