//! Waterfall Effect
//!
//! Falling particles with wobble, floor ripples, sway streams and a mist
//! overlay. The simulation is plain data; `render` paints it and
//! `component` wires it to a canvas element.

mod component;
mod config;
mod particle;
mod render;
mod simulation;

pub use component::WaterfallCanvas;
pub use config::{Span, StreamStyle, WaterfallConfig};
pub use particle::{Particle, Ripple, SPAWN_BAND};
pub use render::paint_frame;
pub use simulation::WaterfallSim;
