//! Project Card Component
//!
//! One project with meta pills, tech stack, collapsible highlights and
//! repository / demo buttons.

use leptos::prelude::*;

use crate::highlights::{split_bullets, toggle_label, visible_bullets};
use crate::models::{present, Project};

#[component]
pub fn ProjectCard(project: Project, #[prop(default = 0)] index: usize) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let bullets = StoredValue::new(split_bullets(project.highlights.as_deref()));
    let total = bullets.with_value(Vec::len);

    let pills = [
        (present(&project.category).map(str::to_string), "meta-tag category"),
        (present(&project.status).map(str::to_string), "meta-tag status"),
        (present(&project.period).map(str::to_string), "meta-tag period"),
    ];
    let description = present(&project.description).map(str::to_string);
    let tech_stack = present(&project.tech_stack).map(str::to_string);
    let github = present(&project.github_link).map(str::to_string);
    let live = present(&project.live_link).map(str::to_string);

    view! {
        <div class="project-card" style=format!("animation-delay: {}ms", index * 100)>
            <div class="card-accent"></div>
            <div class="card-content">
                <div class="project-header">
                    <h3 class="project-title">{project.title.clone()}</h3>
                    <div class="project-meta">
                        {pills
                            .into_iter()
                            .filter_map(|(text, class)| text.map(|t| view! { <span class=class>{t}</span> }))
                            .collect_view()}
                    </div>
                </div>

                {description.map(|d| view! { <p class="project-description">{d}</p> })}

                {tech_stack.map(|stack| view! {
                    <div class="tech-stack">
                        <div class="tech-stack-label">"Technology Stack"</div>
                        <div class="tech-stack-content">{stack}</div>
                    </div>
                })}

                <Show when=move || total != 0>
                    <div class="project-highlights">
                        <div class="highlights-label">"Key Highlights"</div>
                        <ul class="bullets-list">
                            {move || {
                                bullets.with_value(|all| {
                                    visible_bullets(all, expanded.get())
                                        .iter()
                                        .map(|bullet| view! {
                                            <li class="bullet-item">
                                                <span class="bullet-icon">"•"</span>
                                                <span>{bullet.clone()}</span>
                                            </li>
                                        })
                                        .collect_view()
                                })
                            }}
                        </ul>
                        {move || toggle_label(total, expanded.get()).map(|label| view! {
                            <button class="show-more" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                                {label}
                            </button>
                        })}
                    </div>
                </Show>

                <div class="project-actions">
                    {github.map(|href| view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="action-button github">
                            <span>"GitHub"</span>
                        </a>
                    })}
                    {live.map(|href| view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="action-button demo">
                            <span>"Live Demo"</span>
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}
