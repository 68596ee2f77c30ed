//! Leptos Canvas FX
//!
//! Decorative canvas effects for Leptos:
//! - `WaterfallCanvas`: configurable falling-particle waterfall with ripples
//! - `OrbCanvas`: floating icosphere with drag-to-orbit
//!
//! Both run on `requestAnimationFrame` and stop when their component is
//! cleaned up.

mod animation_loop;
mod canvas;
pub mod orb;
pub mod waterfall;

pub use animation_loop::AnimationLoop;
pub use orb::OrbCanvas;
pub use waterfall::{StreamStyle, WaterfallCanvas, WaterfallConfig};
