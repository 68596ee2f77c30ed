//! Skills Page
//!
//! Stats, category filter, skill grid and a per-category overview.

use leptos::prelude::*;
use leptos_canvas_fx::{WaterfallCanvas, WaterfallConfig};

use crate::api::ApiClient;
use crate::catalog::{self, ALL_CATEGORIES};
use crate::components::{ErrorPanel, LoadingPanel};
use crate::data::{self, skill_meta};
use crate::fetch::{use_fallback_load, LoadState};
use crate::models::Skill;
use crate::motion::flow_from_scroll;
use crate::store::{use_viewport, ViewportStateStoreFields};

const FLOW_SPAN: f64 = 500.0;

#[component]
fn SkillCard(skill: Skill, hovered: RwSignal<Option<String>>) -> impl IntoView {
    let name = skill.name.clone();
    let is_hovered = {
        let name = name.clone();
        move || hovered.with(|h| h.as_deref() == Some(name.as_str()))
    };

    view! {
        <div
            class=move || if is_hovered() { "skill-card hovered" } else { "skill-card" }
            on:mouseenter=move |_| hovered.set(Some(name.clone()))
            on:mouseleave=move |_| hovered.set(None)
        >
            <div class="skill-header">
                <div class="skill-icon">{skill_meta::skill_icon(&skill.name)}</div>
                <div class="skill-info">
                    <h3 class="skill-name">{skill.name.clone()}</h3>
                    <span class="skill-category">{skill.category_or_other().to_string()}</span>
                    <span class=format!("skill-level {}", skill.level.css_class())>{skill.level.as_str()}</span>
                </div>
            </div>
            <p class="skill-description">{skill_meta::skill_description(&skill.name)}</p>
        </div>
    }
}

#[component]
pub fn SkillsPage() -> impl IntoView {
    let viewport = use_viewport();
    let state = use_fallback_load(
        "skills",
        |api: ApiClient| async move { api.fetch_skills().await },
        data::skills,
    );
    let (active, set_active) = signal(ALL_CATEGORIES.to_string());
    let hovered = RwSignal::new(None::<String>);

    let skills = Memo::new(move |_| state.with(|s| s.items().to_vec()));
    let categories = Memo::new(move |_| skills.with(|s| catalog::categories(s)));
    let filtered = Memo::new(move |_| skills.with(|s| active.with(|a| catalog::filter_by_category(s, a))));
    let stats = Memo::new(move |_| skills.with(|s| catalog::stats(s)));
    let groups = Memo::new(move |_| skills.with(|s| catalog::group_by_category(s)));

    let flow = Signal::derive(move || flow_from_scroll(viewport.scroll_y().get(), FLOW_SPAN));

    view! {
        <style>{STYLES}</style>
        <div class="page-root skills-container">
            <div class="waterfall-container full">
                <WaterfallCanvas config=WaterfallConfig::skills() flow=flow />
            </div>
            <div class="noise-overlay"></div>

            <div class="main-content">
                <div class="page-header">
                    <h1 class="page-title">"Technical Expertise"</h1>
                    <p class="page-subtitle">
                        "A comprehensive collection of technologies, frameworks, and tools that power my full-stack development journey"
                    </p>
                </div>

                <div class="skills-count">
                    "Showing " <strong>{move || filtered.with(Vec::len)}</strong> " skills in "
                    <strong>{move || active.with(|a| catalog::scope_label(a).to_string())}</strong>
                </div>

                <div class="stats-overview">
                    <div class="stat-card">
                        <div class="stat-icon">"🧠"</div>
                        <div class="stat-number">{move || stats.get().total}</div>
                        <div class="stat-label">"Total Skills"</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-icon">"🏗️"</div>
                        <div class="stat-number">{move || stats.get().categories}</div>
                        <div class="stat-label">"Categories"</div>
                    </div>
                    <div class="stat-card">
                        <div class="stat-icon">"⚡"</div>
                        <div class="stat-number">{move || stats.get().advanced}</div>
                        <div class="stat-label">"Advanced Skills"</div>
                    </div>
                </div>

                <div class="category-filter">
                    <For
                        each=move || categories.get()
                        key=|category| category.clone()
                        children=move |category| {
                            let label = if category == ALL_CATEGORIES {
                                "All Skills".to_string()
                            } else {
                                category.clone()
                            };
                            let icon = skill_meta::category_icon(&category);
                            let is_active = {
                                let category = category.clone();
                                move || active.with(|a| *a == category)
                            };
                            view! {
                                <button
                                    class=move || if is_active() { "category-btn active" } else { "category-btn" }
                                    on:click=move |_| set_active.set(category.clone())
                                >
                                    {label}
                                    <span>{icon}</span>
                                </button>
                            }
                        }
                    />
                </div>

                {move || match state.get() {
                    LoadState::Loading => {
                        view! { <LoadingPanel message="Loading technical expertise..." /> }.into_any()
                    }
                    LoadState::Failed(message) => {
                        view! { <ErrorPanel title="Unable to Load Skills" message=message /> }.into_any()
                    }
                    LoadState::Ready { .. } => view! {
                        <div class="skills-grid">
                            {filtered
                                .get()
                                .into_iter()
                                .map(|skill| view! { <SkillCard skill=skill hovered=hovered /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}

                <div class="tech-overview">
                    <h2 class="overview-title">"Technology Stack by Category"</h2>
                    <div class="overview-grid">
                        {move || {
                            groups
                                .get()
                                .into_iter()
                                .map(|(category, members)| {
                                    let (shown, more) = catalog::overview(&members);
                                    view! {
                                        <div class="tech-category">
                                            <h3 class="category-name">
                                                {format!("{} {}", skill_meta::category_icon(&category), category)}
                                                <span class="category-count">{format!("({})", members.len())}</span>
                                            </h3>
                                            <div class="category-skills">
                                                {shown
                                                    .iter()
                                                    .map(|skill| view! {
                                                        <span class="mini-skill">
                                                            {format!("{} {}", skill_meta::skill_icon(&skill.name), skill.name)}
                                                        </span>
                                                    })
                                                    .collect_view()}
                                                {(more > 0).then(|| view! {
                                                    <span class="mini-skill more">{format!("+{} more", more)}</span>
                                                })}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

const STYLES: &str = r#"
.skills-container { font-family: 'Space Grotesk', sans-serif; }
.skills-count { text-align: center; color: #94a3b8; margin-bottom: 2.5rem; font-size: 1.05rem; }
.skills-count strong { color: #93c5fd; }
.stats-overview { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-bottom: clamp(3rem, 5vw, 5rem); }
.stat-card {
  padding: 2.5rem 2rem; text-align: center; border-radius: 25px; backdrop-filter: blur(20px);
  background: linear-gradient(135deg, rgba(30, 41, 59, 0.8), rgba(15, 23, 42, 0.9));
  border: 2px solid rgba(255, 255, 255, 0.1); transition: all 0.5s cubic-bezier(0.4, 0, 0.2, 1);
}
.stat-card:hover { transform: translateY(-15px) scale(1.05); border-color: rgba(59, 130, 246, 0.4); box-shadow: 0 30px 60px rgba(59, 130, 246, 0.4); }
.stat-icon { font-size: 3rem; margin-bottom: 1rem; }
.stat-number { font-size: clamp(2.5rem, 4vw, 4rem); font-weight: 800; color: #3b82f6; }
.stat-label { font-size: 1.05rem; color: #cbd5e1; font-weight: 600; text-transform: uppercase; letter-spacing: 1.5px; }
.category-filter { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-bottom: clamp(3rem, 5vw, 5rem); }
.category-btn {
  display: flex; align-items: center; gap: 0.5rem; padding: 0.9rem 1.8rem; border-radius: 15px; cursor: pointer;
  font-weight: 600; font-size: 1rem; white-space: nowrap; color: #93c5fd;
  background: linear-gradient(135deg, rgba(59, 130, 246, 0.15), rgba(37, 99, 235, 0.15));
  border: 2px solid rgba(59, 130, 246, 0.3); transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
}
.category-btn:hover { transform: scale(1.05); }
.category-btn.active { color: #fff; background: linear-gradient(135deg, #3b82f6, #8b5cf6); border-color: transparent; }
.skills-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.75rem; margin-bottom: 5rem; }
.skill-card {
  padding: 2rem; border-radius: 22px; background: linear-gradient(135deg, rgba(30, 41, 59, 0.8), rgba(15, 23, 42, 0.9));
  border: 1px solid rgba(255, 255, 255, 0.08); transition: all 0.35s ease; animation: fadeUp 0.5s ease both;
}
.skill-card.hovered { transform: scale(1.05); border-color: rgba(59, 130, 246, 0.45); box-shadow: 0 25px 50px rgba(59, 130, 246, 0.3); }
.skill-header { display: flex; gap: 1.25rem; align-items: flex-start; margin-bottom: 1.1rem; }
.skill-icon { font-size: 2.4rem; }
.skill-info { display: flex; flex-direction: column; gap: 0.35rem; }
.skill-name { font-size: 1.25rem; color: #f8fafc; }
.skill-category { font-size: 0.82rem; color: #94a3b8; }
.skill-level { align-self: flex-start; padding: 0.2rem 0.7rem; border-radius: 999px; font-size: 0.75rem; font-weight: 700; }
.level-advanced { color: #6ee7b7; background: rgba(16, 185, 129, 0.15); border: 1px solid rgba(16, 185, 129, 0.35); }
.level-intermediate { color: #93c5fd; background: rgba(59, 130, 246, 0.15); border: 1px solid rgba(59, 130, 246, 0.35); }
.level-beginner { color: #fcd34d; background: rgba(245, 158, 11, 0.15); border: 1px solid rgba(245, 158, 11, 0.35); }
.skill-description { color: #cbd5e1; line-height: 1.65; font-size: 0.95rem; }
.tech-overview { padding: clamp(2rem, 4vw, 3.5rem); border-radius: 28px; background: rgba(15, 23, 42, 0.75); border: 1px solid rgba(255, 255, 255, 0.08); }
.overview-title { text-align: center; font-size: clamp(1.6rem, 3vw, 2.3rem); margin-bottom: 2.5rem; color: #e2e8f0; }
.overview-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.tech-category { padding: 1.5rem; border-radius: 18px; background: rgba(30, 41, 59, 0.6); }
.category-name { display: flex; align-items: center; gap: 0.5rem; font-size: 1.1rem; color: #93c5fd; margin-bottom: 1rem; }
.category-count { margin-left: auto; font-size: 0.8rem; color: #94a3b8; }
.category-skills { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.mini-skill { padding: 0.35rem 0.75rem; border-radius: 10px; font-size: 0.8rem; color: #e2e8f0; background: rgba(15, 23, 42, 0.8); }
.mini-skill.more { background: rgba(59, 130, 246, 0.1); color: #93c5fd; }
@media (max-width: 768px) { .stats-overview { grid-template-columns: 1fr; gap: 1.5rem; } }
"#;
