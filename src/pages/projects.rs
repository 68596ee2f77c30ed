//! Projects Page

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{EmptyPanel, ErrorPanel, LoadingPanel, ProjectCard};
use crate::data;
use crate::fetch::{use_fallback_load, LoadState};
use crate::ordering::sorted_by_order;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let state = use_fallback_load(
        "projects",
        |api: ApiClient| async move { api.fetch_projects().await },
        data::projects,
    );
    let sorted = Memo::new(move |_| state.with(|s| sorted_by_order(s.items())));

    view! {
        <style>{STYLES}</style>
        <div class="page-root projects-page">
            <div class="noise-overlay"></div>
            <div class="main-content">
                <div class="page-header">
                    <h1 class="page-title">"Projects Portfolio"</h1>
                    <p class="page-subtitle">
                        "Enterprise-grade solutions showcasing technical expertise and modern development practices"
                    </p>
                    <Show when=move || state.with(|s| matches!(s, LoadState::Ready { .. }))>
                        <div class="projects-counter">{move || format!("{} Featured Projects", sorted.with(Vec::len))}</div>
                    </Show>
                </div>

                {move || match state.get() {
                    LoadState::Loading => view! { <LoadingPanel message="Loading portfolio projects..." /> }.into_any(),
                    LoadState::Failed(message) => {
                        view! { <ErrorPanel title="Unable to Load Projects" message=message /> }.into_any()
                    }
                    LoadState::Ready { .. } if sorted.with(Vec::is_empty) => {
                        view! { <EmptyPanel message="No projects available" /> }.into_any()
                    }
                    LoadState::Ready { .. } => view! {
                        <div class="projects-grid">
                            <For
                                each=move || sorted.get().into_iter().enumerate()
                                key=|(index, project)| (project.id, project.title.clone(), *index)
                                children=|(index, project)| view! { <ProjectCard project=project index=index /> }
                            />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

const STYLES: &str = r#"
.projects-counter {
  display: inline-block; margin-top: 1.5rem; padding: 0.6rem 1.4rem; border-radius: 999px; font-weight: 600;
  color: #93c5fd; background: rgba(59, 130, 246, 0.12); border: 1px solid rgba(59, 130, 246, 0.3);
}
.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(min(100%, 520px), 1fr)); gap: 2rem; }
.project-card {
  position: relative; border-radius: 24px; overflow: hidden; animation: fadeUp 0.5s ease-out both;
  background: linear-gradient(135deg, rgba(30, 41, 59, 0.85), rgba(15, 23, 42, 0.92));
  border: 1px solid rgba(255, 255, 255, 0.08); box-shadow: 0 20px 50px rgba(0, 0, 0, 0.35);
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.project-card:hover { transform: scale(1.02); box-shadow: 0 30px 60px rgba(59, 130, 246, 0.25); }
.card-accent { height: 4px; background: linear-gradient(90deg, #3b82f6, #8b5cf6, #10b981); }
.card-content { padding: 2rem; display: flex; flex-direction: column; gap: 1.25rem; }
.project-title { font-family: 'Space Grotesk', sans-serif; font-size: 1.45rem; line-height: 1.3; color: #f8fafc; }
.project-meta { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.8rem; }
.meta-tag { padding: 0.35rem 0.85rem; border-radius: 999px; font-size: 0.78rem; font-weight: 600; }
.meta-tag.category { color: #c4b5fd; background: rgba(139, 92, 246, 0.14); border: 1px solid rgba(139, 92, 246, 0.3); }
.meta-tag.status { color: #6ee7b7; background: rgba(16, 185, 129, 0.14); border: 1px solid rgba(16, 185, 129, 0.3); }
.meta-tag.period { color: #93c5fd; background: rgba(59, 130, 246, 0.14); border: 1px solid rgba(59, 130, 246, 0.3); }
.project-description { color: #cbd5e1; line-height: 1.7; }
.tech-stack { padding: 1rem 1.2rem; border-radius: 14px; background: rgba(15, 23, 42, 0.7); border: 1px solid rgba(59, 130, 246, 0.2); }
.tech-stack-label, .highlights-label { font-size: 0.75rem; letter-spacing: 1.5px; text-transform: uppercase; color: #64748b; margin-bottom: 0.5rem; }
.tech-stack-content { font-family: 'JetBrains Mono', monospace; font-size: 0.85rem; color: #93c5fd; line-height: 1.6; }
.bullets-list { list-style: none; display: flex; flex-direction: column; gap: 0.55rem; }
.bullet-item { display: flex; gap: 0.6rem; color: #cbd5e1; line-height: 1.55; font-size: 0.93rem; }
.bullet-icon { color: #3b82f6; font-weight: 700; }
.show-more {
  margin-top: 0.8rem; padding: 0.45rem 1rem; border-radius: 10px; cursor: pointer; font-weight: 600; font-size: 0.85rem;
  color: #93c5fd; background: rgba(59, 130, 246, 0.1); border: 1px solid rgba(59, 130, 246, 0.3);
}
.show-more:hover { background: rgba(59, 130, 246, 0.2); }
.project-actions { display: flex; flex-wrap: wrap; gap: 0.8rem; }
.project-actions .action-button {
  padding: 0.7rem 1.4rem; border-radius: 12px; font-weight: 600; text-decoration: none; transition: transform 0.2s ease;
}
.project-actions .action-button:hover { transform: translateY(-2px); }
.action-button.github { color: #f8fafc; background: #1f2937; border: 1px solid rgba(255, 255, 255, 0.15); }
.action-button.demo { color: #fff; background: linear-gradient(135deg, #3b82f6, #8b5cf6); }
"#;
