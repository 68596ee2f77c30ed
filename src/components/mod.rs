//! UI Components
//!
//! Reusable Leptos components.

mod navbar;
mod project_card;
mod social_links;
mod status;

pub use navbar::Navbar;
pub use project_card::ProjectCard;
pub use social_links::SocialLinks;
pub use status::{EmptyPanel, ErrorPanel, LoadingPanel, STATUS_STYLES};
