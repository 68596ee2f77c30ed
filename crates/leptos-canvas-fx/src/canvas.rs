//! Canvas helpers shared by the effects.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Fetch the 2D rendering context of a canvas.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("not a CanvasRenderingContext2d"))
}

/// Device pixel ratio clamped to `[min, max]`.
pub fn device_pixel_ratio(min: f64, max: f64) -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(min, max)
}

/// Backing-store size for a rendered size and pixel ratio.
pub fn backing_size(css_width: i32, css_height: i32, ratio: f64) -> (u32, u32) {
    let scale = |v: i32| (v.max(0) as f64 * ratio).round() as u32;
    (scale(css_width), scale(css_height))
}

/// Resize the backing store to the element's rendered size so the output
/// is not stretched. Returns the rendered (CSS pixel) size.
pub fn sync_backing_store(canvas: &HtmlCanvasElement, ratio: f64) -> (f64, f64) {
    let (css_w, css_h) = (canvas.offset_width(), canvas.offset_height());
    let (w, h) = backing_size(css_w, css_h, ratio);
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
    (css_w.max(0) as f64, css_h.max(0) as f64)
}

#[cfg(test)]
mod tests {
    use super::backing_size;

    #[test]
    fn test_backing_size() {
        assert_eq!(backing_size(300, 150, 1.0), (300, 150));
        assert_eq!(backing_size(301, 151, 1.5), (452, 227));
        assert_eq!(backing_size(-4, 10, 2.0), (0, 20));
    }
}
