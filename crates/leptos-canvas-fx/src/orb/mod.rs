//! 3D Orb
//!
//! A metallic icosphere drawn on a 2D canvas with a tiny software
//! pipeline: rotate, project, cull, sort, fill.

mod component;
mod mesh;
mod scene;

pub use component::OrbCanvas;
pub use mesh::{Mesh, Vec3};
pub use scene::{Camera, FloatMotion, OrbScene, Orbit, Pose, ShadedFace};
