//! Bundled Content
//!
//! Build-time tables shown when the backend is unreachable or empty, plus
//! the static profile copy used by the home and about pages.

mod awards;
mod certifications;
mod projects;
pub mod profile;
pub mod skill_meta;
mod skills;

pub use awards::awards;
pub use certifications::certifications;
pub use projects::projects;
pub use skills::skills;
