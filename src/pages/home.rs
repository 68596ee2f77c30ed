//! Home Page
//!
//! Hero with name block, summary, calls to action, education badges, tech
//! stack, the 3D orb and portrait, over a scroll-driven waterfall.

use leptos::prelude::*;
use leptos_canvas_fx::{OrbCanvas, WaterfallCanvas, WaterfallConfig};

use crate::components::SocialLinks;
use crate::context::use_app_context;
use crate::data::profile;
use crate::motion::{flow_from_scroll, scroll_progress};
use crate::store::{use_viewport, ViewportStateStoreFields};

const FLOW_SPAN: f64 = 300.0;

#[component]
pub fn HomePage() -> impl IntoView {
    let viewport = use_viewport();
    let mailto = use_app_context().config.links.mailto;
    let (cover_fit, set_cover_fit) = signal(false);

    let flow = Signal::derive(move || flow_from_scroll(viewport.scroll_y().get(), FLOW_SPAN));
    let progress = move || scroll_progress(viewport.scroll_y().get(), viewport.scroll_max().get());
    let glow_style = move || {
        format!(
            "left: {:.2}%; top: {:.2}%;",
            viewport.mouse_x_pct().get(),
            viewport.mouse_y_pct().get()
        )
    };

    view! {
        <style>{STYLES}</style>
        <div class="page-root home-container">
            <div class="waterfall-container">
                <WaterfallCanvas config=WaterfallConfig::home() flow=flow />
            </div>
            <div class="noise-overlay"></div>
            <div class="cursor-glow" style=glow_style></div>
            <div class="scroll-progress" style=move || format!("width: {:.2}%", progress())></div>

            <div class="main-content home-grid">
                <div class="left-column">
                    <div class="name-section">
                        <div class="name-subtitle">{profile::SUBTITLE}</div>
                        <div class="name-main">{profile::NAME}</div>
                        <div class="name-role">{profile::ROLE}</div>
                    </div>

                    <div class="technical-summary">
                        {profile::SUMMARY_LINES
                            .iter()
                            .enumerate()
                            .map(|(i, line)| view! {
                                <span class="summary-line" style=format!("animation-delay: {}ms", 500 + i * 200)>
                                    {*line}
                                </span>
                            })
                            .collect_view()}
                        <div class="summary-points">
                            {profile::SUMMARY_POINTS
                                .iter()
                                .map(|point| view! {
                                    <div class="summary-point">
                                        <span class="point-icon">"→"</span>
                                        <span>{*point}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="action-buttons">
                        <a href="/projects" class="action-button action-primary">
                            <span>"View Projects"</span>
                            <span>"→"</span>
                        </a>
                        <a href="/skills" class="action-button action-secondary">
                            <span>"Technical Skills"</span>
                            <span>"⚡"</span>
                        </a>
                        <a href=mailto class="action-button action-secondary">
                            <span>"Contact Me"</span>
                            <span>"📧"</span>
                        </a>
                    </div>

                    <div class="education-section">
                        <div class="education-title">"Academic Background"</div>
                        <div class="education-badges">
                            {profile::EDUCATION_BADGES
                                .iter()
                                .map(|(label, modifier)| view! {
                                    <div class=format!("education-badge {}", modifier)>{*label}</div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="tech-stack">
                        <div class="education-title">"Current Tech Stack"</div>
                        <div class="tech-stack-grid">
                            {profile::TECH_STACK
                                .iter()
                                .map(|tech| view! { <div class="tech-item">{*tech}</div> })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="right-column">
                    <div class="hero3d-wrap" aria-hidden="true">
                        <OrbCanvas />
                        <div class="hero3d-caption">"Interactive 3D Accent"</div>
                    </div>

                    <div class="profile-main-container">
                        <img
                            src=profile::PROFILE_IMAGE
                            alt=format!("{} - Professional Portrait", profile::NAME)
                            class=move || if cover_fit.get() { "profile-image cover-fit" } else { "profile-image" }
                        />
                        <button
                            class="image-fit-toggle"
                            title=move || if cover_fit.get() { "Show full image" } else { "Fill container" }
                            on:click=move |_| set_cover_fit.update(|c| *c = !*c)
                        >
                            {move || if cover_fit.get() { "📐 Fit" } else { "🔄 Fill" }}
                        </button>
                        <div class="profile-image-label">"Professional Portrait"</div>
                    </div>
                </div>
            </div>

            <SocialLinks />
        </div>
    }
}

const STYLES: &str = r#"
.cursor-glow {
  position: fixed; width: 420px; height: 420px; border-radius: 50%; pointer-events: none; z-index: 2;
  transform: translate(-50%, -50%); transition: left 0.2s ease-out, top 0.2s ease-out;
  background: radial-gradient(circle, rgba(59, 130, 246, 0.12) 0%, transparent 70%);
}
.home-grid { display: grid; grid-template-columns: 1.1fr 0.9fr; gap: clamp(2rem, 5vw, 5rem); align-items: start; }
.name-section { margin-bottom: 2rem; animation: fadeDown 1s ease both; }
.name-subtitle { font-family: 'JetBrains Mono', monospace; font-size: 0.95rem; color: #60a5fa; letter-spacing: 2px; text-transform: uppercase; }
.name-main {
  font-family: 'Space Grotesk', sans-serif; font-size: clamp(3rem, 7vw, 5.5rem); font-weight: 800; line-height: 1.05;
  margin: 0.5rem 0; color: transparent; background: linear-gradient(135deg, #f8fafc, #93c5fd, #a78bfa);
  -webkit-background-clip: text; background-clip: text;
}
.name-role { font-size: clamp(1.1rem, 2vw, 1.5rem); color: #cbd5e1; font-weight: 500; }
.technical-summary { margin-bottom: 2.5rem; }
.summary-line { display: block; font-size: 1.1rem; line-height: 1.8; color: #cbd5e1; animation: fadeUp 0.5s ease both; }
.summary-points { margin-top: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; }
.summary-point { display: flex; gap: 0.75rem; color: #94a3b8; animation: fadeUp 0.4s ease both; }
.point-icon { color: #3b82f6; font-weight: 700; }
.action-buttons { display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 2.5rem; }
.action-button {
  display: inline-flex; align-items: center; gap: 0.6rem; padding: 0.95rem 1.8rem; border-radius: 14px;
  font-weight: 600; text-decoration: none; transition: all 0.3s ease;
}
.action-primary { background: linear-gradient(135deg, #3b82f6, #8b5cf6); color: #fff; box-shadow: 0 10px 30px rgba(59, 130, 246, 0.35); }
.action-secondary { border: 1px solid rgba(148, 163, 184, 0.3); color: #e2e8f0; background: rgba(30, 41, 59, 0.5); }
.action-button:hover { transform: translateY(-3px); }
.education-section, .tech-stack { margin-bottom: 2rem; }
.education-title { font-size: 0.8rem; color: #64748b; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 0.9rem; }
.education-badges, .tech-stack-grid { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.education-badge { padding: 0.6rem 1.1rem; border-radius: 10px; font-size: 0.9rem; font-weight: 600; }
.badge-royal { background: rgba(245, 158, 11, 0.12); border: 1px solid rgba(245, 158, 11, 0.35); color: #fcd34d; }
.badge-sliit { background: rgba(59, 130, 246, 0.12); border: 1px solid rgba(59, 130, 246, 0.35); color: #93c5fd; }
.tech-item {
  padding: 0.55rem 1rem; border-radius: 10px; font-size: 0.88rem; color: #e2e8f0;
  background: rgba(30, 41, 59, 0.7); border: 1px solid rgba(255, 255, 255, 0.08);
}
.right-column { display: flex; flex-direction: column; gap: 2rem; }
.hero3d-wrap {
  position: relative; height: 320px; border-radius: 24px; overflow: hidden;
  background: radial-gradient(circle at 50% 40%, rgba(99, 102, 241, 0.18), transparent 70%);
}
.hero3d-caption { position: absolute; bottom: 12px; width: 100%; text-align: center; font-size: 0.75rem; color: #64748b; letter-spacing: 1px; }
.profile-main-container {
  position: relative; aspect-ratio: 4 / 5; border-radius: 28px; overflow: hidden;
  background: rgba(15, 23, 42, 0.8); border: 1px solid rgba(255, 255, 255, 0.1);
  box-shadow: 0 30px 60px rgba(0, 0, 0, 0.4); animation: float 6s ease-in-out infinite;
}
.profile-image { width: 100%; height: 100%; object-fit: contain; display: block; }
.profile-image.cover-fit { object-fit: cover; }
.image-fit-toggle {
  position: absolute; top: 14px; right: 14px; padding: 0.45rem 0.9rem; border-radius: 10px; border: none;
  cursor: pointer; font-size: 0.8rem; color: #fff; background: rgba(15, 23, 42, 0.75);
}
.profile-image-label { position: absolute; bottom: 14px; left: 14px; font-size: 0.8rem; color: #cbd5e1; }
.social-links { position: fixed; left: 24px; bottom: 24px; display: flex; flex-direction: column; gap: 0.75rem; z-index: 20; }
.social-link {
  position: relative; width: 44px; height: 44px; border-radius: 12px; display: flex; align-items: center; justify-content: center;
  color: #cbd5e1; background: rgba(30, 41, 59, 0.8); border: 1px solid rgba(255, 255, 255, 0.1); transition: all 0.3s ease;
}
.social-link:hover { color: #3b82f6; transform: scale(1.1); }
.social-tooltip { position: absolute; left: 54px; font-size: 0.75rem; white-space: nowrap; opacity: 0; transition: opacity 0.2s; }
.social-link:hover .social-tooltip { opacity: 1; }
@keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-10px); } }
@media (max-width: 1024px) { .home-grid { grid-template-columns: 1fr; } }
@media (max-width: 768px) { .social-links { flex-direction: row; left: 50%; transform: translateX(-50%); } .social-tooltip { display: none; } }
"#;
