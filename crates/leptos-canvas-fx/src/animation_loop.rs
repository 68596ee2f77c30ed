//! Animation Loop
//!
//! Drives a per-frame callback from `requestAnimationFrame` and keeps a
//! window `resize` listener alive for the lifetime of the loop.
//! Stopping (or dropping) the loop cancels the pending frame, removes the
//! listener and releases both closures.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

struct LoopInner {
    running: Cell<bool>,
    frame_id: Cell<Option<i32>>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    resize: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn schedule(&self) {
        let Some(window) = web_sys::window() else {
            self.running.set(false);
            return;
        };
        let frame = self.frame.borrow();
        if let Some(cb) = frame.as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.frame_id.set(Some(id)),
                Err(err) => {
                    log::warn!("requestAnimationFrame failed: {:?}", err);
                    self.running.set(false);
                }
            }
        }
    }
}

/// Handle to a running animation loop.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    /// Start the loop. `on_resize` runs once immediately and then on every
    /// window resize; `on_frame` receives the frame timestamp in milliseconds.
    pub fn start<F, R>(mut on_frame: F, mut on_resize: R) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
        R: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let inner = Rc::new(LoopInner {
            running: Cell::new(true),
            frame_id: Cell::new(None),
            frame: RefCell::new(None),
            resize: RefCell::new(None),
        });

        on_resize();
        let resize_cb = Closure::<dyn FnMut()>::new(move || on_resize());
        window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;
        *inner.resize.borrow_mut() = Some(resize_cb);

        let weak = Rc::downgrade(&inner);
        let frame_cb = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            let Some(inner) = weak.upgrade() else { return };
            inner.frame_id.set(None);
            if !inner.running.get() {
                return;
            }
            on_frame(time);
            inner.schedule();
        });
        *inner.frame.borrow_mut() = Some(frame_cb);
        inner.schedule();

        Ok(Self { inner })
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Cancel the pending frame and detach the resize listener. Idempotent.
    pub fn stop(&self) {
        let inner = &self.inner;
        let was_running = inner.running.replace(false);
        let window = web_sys::window();

        if let (Some(window), Some(id)) = (window.as_ref(), inner.frame_id.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        if let Some(resize_cb) = inner.resize.borrow_mut().take() {
            if let Some(window) = window.as_ref() {
                let _ = window
                    .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }
        }
        inner.frame.borrow_mut().take();

        if was_running {
            log::debug!("animation loop stopped");
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
