//! About Page
//!
//! Bio, animated stat counters, skill groups, a reveal-on-scroll timeline,
//! honours and contact buttons. Starts light and switches to the dark theme
//! shortly after mount.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use leptos_canvas_fx::{WaterfallCanvas, WaterfallConfig};

use crate::context::use_app_context;
use crate::data::profile::{self, Stat, TimelineEntry};
use crate::motion::{flow_from_scroll, format_stat, is_revealed, CountUp, STATS_REVEAL, TIMELINE_REVEAL};
use crate::store::{use_viewport, ViewportStateStoreFields};

const FLOW_SPAN: f64 = 500.0;
const DARK_AFTER: Duration = Duration::from_millis(800);

/// Becomes true once `node` scrolls above `fraction` of the viewport, and
/// stays true.
fn use_reveal(node: NodeRef<html::Div>, fraction: f64) -> ReadSignal<bool> {
    let viewport = use_viewport();
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        let _ = viewport.scroll_y().get();
        let height = viewport.height().get();
        if revealed.get_untracked() {
            return;
        }
        if let Some(el) = node.get() {
            let top = el.get_bounding_client_rect().top();
            if is_revealed(top, height, fraction) {
                set_revealed.set(true);
            }
        }
    });
    revealed
}

#[component]
fn StatCounters() -> impl IntoView {
    let stats_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(stats_ref, STATS_REVEAL);
    let (step, set_step) = signal(0u32);
    let ticker = StoredValue::new(None::<IntervalHandle>);

    Effect::new(move |_| {
        if !visible.get() || ticker.with_value(Option::is_some) {
            return;
        }
        let interval = CountUp::new(0.0).tick_interval();
        let handle = set_interval_with_handle(
            move || {
                let next = step.get_untracked() + 1;
                set_step.set(next);
                if next >= CountUp::STEPS {
                    if let Some(h) = ticker.try_get_value().flatten() {
                        h.clear();
                    }
                }
            },
            interval,
        );
        match handle {
            Ok(h) => ticker.set_value(Some(h)),
            Err(err) => {
                log::warn!("count-up timer failed: {:?}", err);
                set_step.set(CountUp::STEPS);
            }
        }
    });

    on_cleanup(move || {
        if let Some(h) = ticker.try_get_value().flatten() {
            h.clear();
        }
    });

    view! {
        <div class="stats-section" node_ref=stats_ref>
            {profile::STATS
                .iter()
                .enumerate()
                .map(|(i, stat): (usize, &Stat)| {
                    let counter = CountUp::new(stat.target);
                    let suffix = stat.suffix;
                    view! {
                        <div class="stat-card" style=format!("animation-delay: {}ms", 200 + i * 100)>
                            <div class="stat-number">
                                {move || format!("{}{}", format_stat(counter.value_at(step.get())), suffix)}
                            </div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry, index: usize) -> impl IntoView {
    let item_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(item_ref, TIMELINE_REVEAL);
    let side = if index % 2 == 0 { "left" } else { "right" };

    view! {
        <div
            node_ref=item_ref
            class=move || format!("timeline-item {}{}", side, if visible.get() { " visible" } else { "" })
        >
            <div class="timeline-year" data-icon=entry.icon>{entry.year}</div>
            <div class="timeline-content">
                <h3 class="timeline-event">{entry.event}</h3>
                <p class="timeline-description">{entry.description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let viewport = use_viewport();
    let links = use_app_context().config.links;
    let (is_dark, set_is_dark) = signal(false);
    let (active_group, set_active_group) = signal(None::<usize>);

    let flow = Signal::derive(move || flow_from_scroll(viewport.scroll_y().get(), FLOW_SPAN));

    match set_timeout_with_handle(move || set_is_dark.set(true), DARK_AFTER) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::debug!("theme timer failed: {:?}", err),
    }

    view! {
        <style>{STYLES}</style>
        <div class=move || if is_dark.get() { "page-root about-container dark" } else { "page-root about-container" }>
            <div class="waterfall-container full">
                <WaterfallCanvas config=WaterfallConfig::about() flow=flow />
            </div>
            <div class="noise-overlay"></div>
            <div class="waterfall-flow-indicator" style=move || format!("width: {:.2}%", flow.get() * 100.0)></div>

            <div class="nav-back">
                <a href="/" class="back-button">"← Back to Home"</a>
            </div>
            <div class="theme-toggle">
                <button class="theme-button" on:click=move |_| set_is_dark.update(|d| *d = !*d)>
                    {move || if is_dark.get() { "☀️" } else { "🌙" }}
                </button>
            </div>

            <div class="main-content">
                <div class="page-header">
                    <h1 class="page-title">"About Me"</h1>
                    <p class="page-subtitle">
                        "Driven by passion, powered by innovation, and dedicated to creating impactful digital solutions"
                    </p>
                </div>

                <StatCounters />

                <div class="content-grid">
                    <div>
                        <div class="about-text">
                            <p>
                                "I'm a " <span class="highlight">"3rd year undergraduate at SLIIT"</span>
                                " and a proud " <span class="highlight">"Royal College Old Boy Union member"</span>
                                ", driven by a strong passion for web development and creating impactful digital solutions."
                            </p>
                            <p>
                                "Currently, I'm building my skills in both frontend and backend technologies while exploring real-world projects that sharpen my problem-solving and technical abilities. I excel at using "
                                <span class="highlight">"AI tools effectively"</span>
                                " and have mastered the art of prompt engineering to build projects efficiently in less time."
                            </p>
                            <p>
                                "Beyond academics, I'm deeply interested in " <span class="highlight">"entrepreneurship"</span>
                                " and aim to launch my own startup in the near future. I see technology as a powerful way to solve problems and add value to people's lives."
                            </p>
                        </div>

                        <div class="education-card">
                            <div class="education-icon">"🎓"</div>
                            <h3 class="education-title">"Educational Journey"</h3>
                            <p class="education-subtitle">
                                "SLIIT • BSc (Hons) Information Technology • Year 3 • CGPA: 3.37"
                            </p>
                            <p class="about-text">
                                "Specializing in Software Engineering with a focus on full-stack development, scalable architectures, and innovative problem-solving approaches."
                            </p>
                        </div>
                    </div>

                    <div class="skills-section">
                        <h2 class="section-title">"Technical Arsenal"</h2>
                        <div class="skills-grid">
                            {profile::SKILL_GROUPS
                                .iter()
                                .enumerate()
                                .map(|(i, group)| view! {
                                    <div
                                        class=move || {
                                            if active_group.get() == Some(i) { "skill-category active" } else { "skill-category" }
                                        }
                                        on:mouseenter=move |_| set_active_group.set(Some(i))
                                        on:mouseleave=move |_| set_active_group.set(None)
                                    >
                                        <div class="category-header">
                                            <span class="category-icon">{group.icon}</span>
                                            <h3 class="category-title">{group.category}</h3>
                                        </div>
                                        <div class="skill-list">
                                            {group
                                                .skills
                                                .iter()
                                                .map(|skill| view! { <span class="skill-item">{*skill}</span> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="timeline-section">
                    <h2 class="section-title">"My Journey"</h2>
                    <div class="timeline">
                        {profile::TIMELINE
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| view! { <TimelineItem entry=*entry index=index /> })
                            .collect_view()}
                    </div>
                </div>

                <div class="honors-section">
                    <h2 class="section-title">"Honors & Awards"</h2>
                    <div class="honors-grid">
                        {profile::HONORS
                            .iter()
                            .map(|honor| view! {
                                <div class="honor-card">
                                    <div class="honor-icon" style=format!("color: {}", honor.color)>{honor.icon}</div>
                                    <h3 class="honor-title">{honor.title}</h3>
                                    <p class="honor-org">{honor.organization}</p>
                                    <p class="honor-description">{honor.description}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="contact-section">
                    <h2 class="contact-title">"Let's Connect!"</h2>
                    <p class="contact-text">
                        "I'm always open to connect with like-minded individuals, mentors, and professionals who share a passion for technology, innovation, and building the future together."
                    </p>
                    <div class="contact-buttons">
                        <a href=links.mailto class="contact-button contact-primary">"✉️ Send Email"</a>
                        <a href=links.linkedin target="_blank" rel="noopener noreferrer" class="contact-button contact-secondary">
                            "💼 LinkedIn"
                        </a>
                        <a href=links.github target="_blank" rel="noopener noreferrer" class="contact-button contact-secondary">
                            "💻 GitHub"
                        </a>
                        <a href=links.youtube target="_blank" rel="noopener noreferrer" class="contact-button contact-secondary">
                            "🎬 YouTube"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

const STYLES: &str = r#"
.about-container { --card: rgba(255, 255, 255, 0.85); --ink: #0f172a; --muted: #475569; background: linear-gradient(135deg, #e0f2fe, #ede9fe); color: var(--ink); transition: background 0.8s ease, color 0.8s ease; }
.about-container.dark { --card: rgba(15, 23, 42, 0.8); --ink: #f8fafc; --muted: #94a3b8; background: linear-gradient(135deg, #0a0a0f 0%, #0f172a 40%, #1e1b4b 100%); }
.about-container .page-subtitle, .about-container .section-title { color: var(--muted); }
.nav-back { position: fixed; top: 80px; left: 24px; z-index: 50; }
.back-button { padding: 0.6rem 1.2rem; border-radius: 12px; text-decoration: none; color: var(--ink); background: var(--card); border: 1px solid rgba(148, 163, 184, 0.3); }
.theme-toggle { position: fixed; top: 80px; right: 24px; z-index: 50; }
.theme-button { width: 48px; height: 48px; border-radius: 50%; border: 1px solid rgba(148, 163, 184, 0.3); background: var(--card); cursor: pointer; font-size: 1.3rem; }
.stats-section { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; margin-bottom: 4rem; }
.stat-card { padding: 2rem 1.5rem; text-align: center; border-radius: 22px; background: var(--card); border: 1px solid rgba(255, 255, 255, 0.1); animation: fadeUp 0.6s ease both; transition: transform 0.3s ease; }
.stat-card:hover { transform: translateY(-8px) scale(1.03); }
.stat-number { font-size: clamp(2.2rem, 4vw, 3.4rem); font-weight: 800; color: #3b82f6; }
.stat-label { margin-top: 0.4rem; font-size: 0.95rem; letter-spacing: 1.5px; text-transform: uppercase; color: var(--muted); }
.content-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; margin-bottom: 5rem; }
.about-text { font-size: 1.08rem; line-height: 1.85; color: var(--muted); }
.about-text p + p { margin-top: 1.2rem; }
.highlight { color: #3b82f6; font-weight: 600; }
.education-card { margin-top: 2.5rem; padding: 2rem; border-radius: 22px; background: var(--card); border: 1px solid rgba(59, 130, 246, 0.25); }
.education-icon { font-size: 2.4rem; }
.education-title { font-size: 1.4rem; margin: 0.6rem 0; color: var(--ink); }
.education-subtitle { color: #3b82f6; font-weight: 600; margin-bottom: 0.8rem; }
.skills-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.25rem; }
.skill-category { padding: 1.5rem; border-radius: 18px; background: var(--card); border: 1px solid rgba(255, 255, 255, 0.08); transition: all 0.3s ease; }
.skill-category.active { transform: scale(1.04); border-color: rgba(59, 130, 246, 0.5); box-shadow: 0 20px 40px rgba(59, 130, 246, 0.25); }
.category-header { display: flex; align-items: center; gap: 0.6rem; margin-bottom: 1rem; }
.category-icon { font-size: 1.5rem; }
.category-title { font-size: 1.1rem; color: var(--ink); }
.skill-list { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.skill-item { padding: 0.35rem 0.8rem; border-radius: 999px; font-size: 0.82rem; color: #93c5fd; background: rgba(59, 130, 246, 0.12); border: 1px solid rgba(59, 130, 246, 0.25); }
.timeline-section { margin-bottom: 5rem; }
.timeline { position: relative; max-width: 900px; margin: 0 auto; }
.timeline::before { content: ''; position: absolute; left: 50%; top: 0; bottom: 0; width: 2px; background: linear-gradient(#3b82f6, #8b5cf6); }
.timeline-item { position: relative; width: 50%; padding: 1rem 2.5rem; opacity: 0; transform: translateY(40px); transition: all 0.7s ease; }
.timeline-item.right { margin-left: 50%; }
.timeline-item.visible { opacity: 1; transform: none; }
.timeline-year { font-weight: 800; color: #3b82f6; margin-bottom: 0.5rem; }
.timeline-year::before { content: attr(data-icon); margin-right: 0.5rem; }
.timeline-content { padding: 1.25rem 1.5rem; border-radius: 16px; background: var(--card); }
.timeline-event { font-size: 1.1rem; color: var(--ink); margin-bottom: 0.4rem; }
.timeline-description { color: var(--muted); line-height: 1.6; }
.honors-section { margin-bottom: 5rem; }
.honors-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
.honor-card { padding: 2rem 1.75rem; border-radius: 20px; background: var(--card); transition: transform 0.3s ease; }
.honor-card:hover { transform: translateY(-6px); }
.honor-icon { font-size: 2.5rem; margin-bottom: 1rem; }
.honor-title { font-size: 1.15rem; color: var(--ink); }
.honor-org { margin: 0.35rem 0 0.8rem; color: #3b82f6; font-weight: 600; font-size: 0.9rem; }
.honor-description { color: var(--muted); line-height: 1.6; font-size: 0.95rem; }
.contact-section { text-align: center; padding: 3rem 2rem; border-radius: 28px; background: var(--card); }
.contact-title { font-size: clamp(1.8rem, 3vw, 2.4rem); margin-bottom: 1rem; color: var(--ink); }
.contact-text { max-width: 640px; margin: 0 auto 2rem; color: var(--muted); line-height: 1.7; }
.contact-buttons { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
.contact-button { padding: 0.85rem 1.6rem; border-radius: 14px; font-weight: 600; text-decoration: none; transition: transform 0.3s ease; }
.contact-button:hover { transform: translateY(-3px); }
.contact-primary { color: #fff; background: linear-gradient(135deg, #3b82f6, #8b5cf6); }
.contact-secondary { color: var(--ink); border: 1px solid rgba(148, 163, 184, 0.35); }
@media (max-width: 1024px) { .content-grid { grid-template-columns: 1fr; } .stats-section { grid-template-columns: repeat(2, 1fr); } }
@media (max-width: 768px) {
  .skills-grid { grid-template-columns: 1fr; }
  .timeline::before { left: 12px; }
  .timeline-item, .timeline-item.right { width: 100%; margin-left: 0; padding-left: 2.5rem; }
  .nav-back, .theme-toggle { top: 70px; }
}
"#;
