//! Viewport State Store
//!
//! Window scroll, size and pointer position, tracked once at the app root
//! with `reactive_stores` so pages subscribe only to the fields they read.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ViewportState {
    pub scroll_y: f64,
    /// Document height minus viewport height
    pub scroll_max: f64,
    pub width: f64,
    pub height: f64,
    /// Pointer position as a percentage of the viewport
    pub mouse_x_pct: f64,
    pub mouse_y_pct: f64,
}

impl ViewportState {
    /// Read the current window metrics. Missing values read as zero.
    pub fn measure() -> Self {
        let window = window();
        let number = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        let height = number(window.inner_height());
        let doc_height = window
            .document()
            .and_then(|doc| doc.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        Self {
            scroll_y: window.scroll_y().unwrap_or(0.0),
            scroll_max: (doc_height - height).max(0.0),
            width: number(window.inner_width()),
            height,
            ..Default::default()
        }
    }
}

pub type ViewportStore = Store<ViewportState>;

/// Create the store, keep it in sync with the window, and provide it.
pub fn provide_viewport() -> ViewportStore {
    let store = Store::new(ViewportState::measure());

    let sync_scroll = move || {
        let now = ViewportState::measure();
        store.scroll_y().set(now.scroll_y);
        store.scroll_max().set(now.scroll_max);
    };
    let on_scroll = window_event_listener(ev::scroll, move |_| sync_scroll());
    let on_resize = window_event_listener(ev::resize, move |_| {
        let now = ViewportState::measure();
        store.width().set(now.width);
        store.height().set(now.height);
        store.scroll_max().set(now.scroll_max);
    });
    let on_mouse = window_event_listener(ev::mousemove, move |ev| {
        let (w, h) = (store.width().get_untracked(), store.height().get_untracked());
        if w > 0.0 && h > 0.0 {
            store.mouse_x_pct().set(ev.client_x() as f64 / w * 100.0);
            store.mouse_y_pct().set(ev.client_y() as f64 / h * 100.0);
        }
    });

    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
        on_mouse.remove();
    });

    provide_context(store);
    store
}

/// Get the viewport store from context
pub fn use_viewport() -> ViewportStore {
    expect_context::<ViewportStore>()
}
