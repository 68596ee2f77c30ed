//! Load Status Panels
//!
//! Shared loading, error and empty placeholders for the data pages.

use leptos::prelude::*;

#[component]
pub fn LoadingPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-panel loading">
            <div class="status-spinner"></div>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn ErrorPanel(#[prop(into)] title: String, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-panel error" role="alert">
            <div class="status-icon">"⚠️"</div>
            <h3>{title}</h3>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn EmptyPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-panel empty">
            <div class="status-icon">"📭"</div>
            <p>{message}</p>
        </div>
    }
}

/// Stylesheet for the panels above, mounted once by the app shell.
pub const STATUS_STYLES: &str = r#"
.status-panel {
  max-width: 640px; margin: 3rem auto; padding: 2.5rem 2rem; text-align: center;
  border-radius: 20px; color: #cbd5e1; backdrop-filter: blur(12px);
  background: rgba(15, 23, 42, 0.7); border: 1px solid rgba(255, 255, 255, 0.1);
}
.status-panel.error { border-color: rgba(239, 68, 68, 0.4); color: #fecaca; }
.status-panel h3 { margin-bottom: 0.75rem; font-size: 1.4rem; color: #f8fafc; }
.status-icon { font-size: 2.5rem; margin-bottom: 1rem; }
.status-spinner {
  width: 48px; height: 48px; margin: 0 auto 1.25rem; border-radius: 50%;
  border: 3px solid rgba(59, 130, 246, 0.2); border-top-color: #3b82f6;
  animation: statusSpin 1s linear infinite;
}
@keyframes statusSpin { to { transform: rotate(360deg); } }
"#;
