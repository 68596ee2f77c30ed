//! Navigation Bar Component
//!
//! Fixed top bar with route-aware links, a scrolled style and a mobile menu
//! that closes on link click or on any click outside it.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::data::profile;
use crate::store::{use_viewport, ViewportStateStoreFields};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", label: "Home", icon: "🏠" },
    NavItem { path: "/about", label: "About", icon: "👨‍💻" },
    NavItem { path: "/projects", label: "Projects", icon: "🚀" },
    NavItem { path: "/skills", label: "Skills", icon: "⚡" },
    NavItem { path: "/certifications", label: "Certifications", icon: "📜" },
    NavItem { path: "/awards", label: "Awards", icon: "🏆" },
];

/// Scroll offset past which the bar switches to its solid style
pub const SCROLLED_AFTER: f64 = 20.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

/// Exact path match, ignoring one trailing slash.
pub fn is_active(item_path: &str, current: &str) -> bool {
    let trim = |p: &str| if p.len() > 1 { p.trim_end_matches('/').to_string() } else { p.to_string() };
    trim(item_path) == trim(current)
}

fn inside_menu(target: Option<web_sys::EventTarget>) -> bool {
    let Some(element) = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    [".mobile-menu-button", ".mobile-menu"]
        .iter()
        .any(|selector| matches!(element.closest(selector), Ok(Some(_))))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let viewport = use_viewport();
    let mailto = use_app_context().config.links.mailto;
    let (menu_open, set_menu_open) = signal(false);

    let scrolled = Memo::new(move |_| is_scrolled(viewport.scroll_y().get()));

    let outside_click = window_event_listener(ev::click, move |ev| {
        if menu_open.get_untracked() && !inside_menu(ev.target()) {
            set_menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    let nav_class = move || if scrolled.get() { "navbar scrolled" } else { "navbar" };

    let desktop_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            view! {
                <a
                    href=path
                    class=move || {
                        if is_active(path, &location.pathname.get()) { "nav-item active" } else { "nav-item" }
                    }
                >
                    <span class="nav-icon">{item.icon}</span>
                    <span class="nav-label">{item.label}</span>
                </a>
            }
        })
        .collect_view();

    let mobile_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            view! {
                <a
                    href=path
                    class=move || {
                        if is_active(path, &location.pathname.get()) {
                            "mobile-nav-item active"
                        } else {
                            "mobile-nav-item"
                        }
                    }
                    on:click=move |_| set_menu_open.set(false)
                >
                    <span class="nav-icon">{item.icon}</span>
                    <span class="nav-label">{item.label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <style>{STYLES}</style>
        <nav class=nav_class>
            <div class="nav-container">
                <a href="/" class="logo" on:click=move |_| set_menu_open.set(false)>
                    <div class="logo-icon">"⚡"</div>
                    <div>
                        <div class="logo-text">{profile::NAME}</div>
                        <div class="logo-subtitle">{profile::NAV_TAGLINE}</div>
                    </div>
                </a>

                <div class="nav-links">
                    {desktop_links}
                    <a href=mailto.clone() class="contact-button">"📧 Contact"</a>
                </div>

                <button
                    class="mobile-menu-button"
                    aria-label="Toggle menu"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_menu_open.update(|open| *open = !*open);
                    }
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <div class=move || if menu_open.get() { "mobile-menu open" } else { "mobile-menu" }>
                <div class="mobile-nav-items">
                    {mobile_links}
                    <a href=mailto class="mobile-nav-item" on:click=move |_| set_menu_open.set(false)>
                        <span class="nav-icon">"📧"</span>
                        <span class="nav-label">"Contact"</span>
                    </a>
                </div>
            </div>
        </nav>
    }
}

const STYLES: &str = r#"
.navbar {
  position: fixed; top: 0; left: 0; right: 0; z-index: 1000;
  padding: 0.6rem 2rem; height: 60px; display: flex; align-items: center;
  backdrop-filter: blur(20px);
  border-bottom: 1px solid rgba(255, 255, 255, 0.1);
  background: linear-gradient(135deg, rgba(15, 23, 42, 0.92), rgba(30, 41, 59, 0.92));
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}
.navbar.scrolled {
  background: linear-gradient(135deg, rgba(15, 23, 42, 0.98), rgba(30, 41, 59, 0.98));
  box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
}
.nav-container {
  width: 100%; max-width: 1400px; margin: 0 auto;
  display: flex; align-items: center; justify-content: space-between;
}
.logo { display: flex; align-items: center; gap: 0.6rem; text-decoration: none; font-family: 'Space Grotesk', sans-serif; }
.logo-icon, .logo-text {
  background: linear-gradient(135deg, #3b82f6, #8b5cf6, #10b981);
  -webkit-background-clip: text; background-clip: text; color: transparent;
  background-size: 200% 200%; animation: gradientFlow 8s ease infinite;
}
.logo-icon { font-size: 1.4rem; }
.logo-text { font-size: 1.2rem; font-weight: 700; }
.logo-subtitle { font-size: 0.7rem; color: #94a3b8; font-weight: 500; letter-spacing: 1px; }
.nav-links { display: flex; gap: 1rem; align-items: center; }
.nav-item {
  position: relative; text-decoration: none; color: #cbd5e1; font-weight: 500; font-size: 0.85rem;
  padding: 0.4rem 0.8rem; border-radius: 6px; display: flex; align-items: center; gap: 0.4rem;
  transition: all 0.3s ease;
}
.nav-item:hover { color: #ffffff; background: rgba(59, 130, 246, 0.1); transform: translateY(-1px); }
.nav-item.active { color: #3b82f6; background: rgba(59, 130, 246, 0.15); }
.nav-item.active::before {
  content: ''; position: absolute; bottom: -4px; left: 50%; transform: translateX(-50%);
  width: 16px; height: 2px; border-radius: 1px; background: linear-gradient(90deg, #3b82f6, #8b5cf6);
}
.mobile-menu-button {
  display: none; background: none; border: none; color: #cbd5e1; font-size: 1.5rem;
  cursor: pointer; padding: 0.4rem; border-radius: 6px; z-index: 1001;
}
.mobile-menu-button:hover { color: #3b82f6; background: rgba(59, 130, 246, 0.1); }
.mobile-menu {
  display: none; position: absolute; top: 100%; left: 0; right: 0; padding: 0.8rem; z-index: 999;
  background: linear-gradient(135deg, rgba(15, 23, 42, 0.98), rgba(30, 41, 59, 0.98));
  backdrop-filter: blur(20px); box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
}
.mobile-menu.open { display: block; animation: slideDown 0.3s ease; }
.mobile-nav-items { display: flex; flex-direction: column; gap: 0.4rem; }
.mobile-nav-item {
  display: flex; align-items: center; gap: 0.8rem; padding: 0.8rem; text-decoration: none;
  color: #cbd5e1; border-radius: 6px; font-size: 0.9rem; transition: all 0.3s ease;
}
.mobile-nav-item:hover { color: #ffffff; background: rgba(59, 130, 246, 0.2); transform: translateX(4px); }
.mobile-nav-item.active { color: #3b82f6; background: rgba(59, 130, 246, 0.15); }
.contact-button {
  padding: 0.5rem 1.2rem; border-radius: 50px; font-weight: 600; font-size: 0.8rem; color: white;
  background: linear-gradient(135deg, #3b82f6, #8b5cf6); text-decoration: none;
  box-shadow: 0 4px 15px rgba(59, 130, 246, 0.3); transition: all 0.3s ease;
}
.contact-button:hover { transform: translateY(-2px); background: linear-gradient(135deg, #2563eb, #7c3aed); }
@keyframes gradientFlow { 0%, 100% { background-position: 0% 50%; } 50% { background-position: 100% 50%; } }
@keyframes slideDown { from { opacity: 0; transform: translateY(-10px); } to { opacity: 1; transform: translateY(0); } }
@media (max-width: 768px) {
  .navbar { padding: 0.6rem 1rem; height: 55px; }
  .nav-links, .contact-button { display: none; }
  .mobile-menu-button { display: block; }
  .logo-subtitle { display: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn test_active_link_matching() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
        assert!(is_active("/projects", "/projects/"));
        assert!(!is_active("/projects", "/skills"));
    }

    #[test]
    fn test_nav_items_cover_every_page() {
        let paths: Vec<_> = NAV_ITEMS.iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["/", "/about", "/projects", "/skills", "/certifications", "/awards"]);
    }
}
