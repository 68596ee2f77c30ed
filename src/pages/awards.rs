//! Awards Page

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::data;
use crate::fetch::{use_fallback_load, LoadState};
use crate::models::{present, Award};
use crate::ordering::sorted_by_order;

/// Org, name tag and period, skipping the blank ones.
fn award_pills(award: &Award) -> Vec<String> {
    [&award.org, &award.name_tag, &award.period]
        .into_iter()
        .filter_map(|field| present(field).map(str::to_string))
        .collect()
}

fn award_card(award: Award) -> impl IntoView {
    let pills = award_pills(&award);
    let description = present(&award.description).map(str::to_string);

    view! {
        <div class="award-card">
            <h3 class="award-title">{award.title}</h3>
            <div class="award-meta">
                {pills.into_iter().map(|p| view! { <span class="pill">{p}</span> }).collect_view()}
            </div>
            {description.map(|d| view! { <div class="award-desc">{d}</div> })}
        </div>
    }
}

#[component]
pub fn AwardsPage() -> impl IntoView {
    let state = use_fallback_load(
        "awards",
        |api: ApiClient| async move { api.fetch_awards().await },
        data::awards,
    );

    view! {
        <style>{STYLES}</style>
        <div class="page-root awards-page">
            <div class="awards-inner">
                <h2 class="awards-heading">"Honours & Awards"</h2>
                <div class="awards-sub">"Leadership, community impact, and personal milestones."</div>

                {move || match state.get() {
                    LoadState::Loading => view! { <LoadingPanel message="Loading…" /> }.into_any(),
                    LoadState::Failed(message) => {
                        view! { <ErrorPanel title="Unable to Load Awards" message=message /> }.into_any()
                    }
                    LoadState::Ready { items, .. } if items.is_empty() => {
                        view! { <EmptyPanel message="No awards to show yet." /> }.into_any()
                    }
                    LoadState::Ready { items, .. } => view! {
                        <div class="awards-grid">
                            {sorted_by_order(&items).into_iter().map(award_card).collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

const STYLES: &str = r#"
.awards-inner { padding: 30px 18px 60px; max-width: 1100px; margin: 0 auto; color: #e2e8f0; position: relative; z-index: 10; }
.awards-heading {
  font-size: 1.8rem; color: transparent; -webkit-background-clip: text; background-clip: text;
  background: linear-gradient(135deg, #f59e0b, #8b5cf6, #3b82f6);
}
.awards-sub { margin-top: 10px; opacity: 0.8; line-height: 1.6; }
.awards-grid { margin-top: 16px; display: grid; grid-template-columns: 1fr; gap: 14px; }
.award-card {
  border-radius: 16px; padding: 16px; border: 1px solid rgba(255, 255, 255, 0.1);
  background: linear-gradient(135deg, rgba(15, 23, 42, 0.82), rgba(30, 41, 59, 0.72));
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.22);
}
.award-title { font-size: 1.1rem; color: #fff; }
.award-meta { margin-top: 6px; display: flex; gap: 8px; flex-wrap: wrap; }
.pill {
  font-size: 0.75rem; padding: 6px 10px; border-radius: 999px; color: #fcd34d;
  border: 1px solid rgba(245, 158, 11, 0.35); background: rgba(245, 158, 11, 0.1);
}
.award-desc { margin-top: 12px; opacity: 0.9; line-height: 1.6; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_pills_skip_blank_fields() {
        let awards = data::awards();
        assert_eq!(award_pills(&awards[0]), vec!["YouTube", "(Imesh Weerasuria)"]);
        assert_eq!(award_pills(&awards[2]), vec!["Local Dhamma School"]);

        let mut award = awards[2].clone();
        award.org = Some("  ".into());
        award.period = Some("2019".into());
        assert_eq!(award_pills(&award), vec!["2019"]);
    }
}
