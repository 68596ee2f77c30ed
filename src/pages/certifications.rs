//! Certifications Page

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_canvas_fx::{WaterfallCanvas, WaterfallConfig};

use crate::api::ApiClient;
use crate::components::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::data;
use crate::fetch::{use_fallback_load, LoadState};
use crate::models::{present, Certification};
use crate::motion::flow_from_scroll;
use crate::ordering::sorted_by_order;
use crate::store::{use_viewport, ViewportStateStoreFields};

const FLOW_SPAN: f64 = 500.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CertStats {
    total: usize,
    issuers: usize,
    verified: usize,
}

fn cert_stats(items: &[Certification]) -> CertStats {
    let issuers: HashSet<&str> = items.iter().filter_map(|c| present(&c.issuer)).collect();
    CertStats {
        total: items.len(),
        issuers: issuers.len(),
        verified: items.iter().filter(|c| present(&c.credential_url).is_some()).count(),
    }
}

#[component]
fn CertCard(cert: Certification, index: usize, hovered: RwSignal<Option<usize>>) -> impl IntoView {
    let issuer = present(&cert.issuer).map(str::to_string);
    let issued = present(&cert.issue_date).map(|d| format!("📅 Issued {}", d));
    let credential_id = present(&cert.credential_id).map(|id| format!("🆔 ID: {}", id));
    let description = present(&cert.description).map(str::to_string);
    let url = present(&cert.credential_url).map(str::to_string);

    view! {
        <div
            class=move || if hovered.get() == Some(index) { "cert-card hovered" } else { "cert-card" }
            style=format!("animation-delay: {}ms", 500 + index * 100)
            on:mouseenter=move |_| hovered.set(Some(index))
            on:mouseleave=move |_| hovered.set(None)
        >
            <div class="cert-content">
                <div class="cert-icon">"📜"</div>
                <div class="cert-details">
                    <h3 class="cert-title">{cert.title.clone()}</h3>
                    {issuer.map(|i| view! { <p class="cert-issuer">{i}</p> })}
                    <div class="cert-meta">
                        {issued.map(|d| view! { <span class="meta-tag">{d}</span> })}
                        {credential_id.map(|id| view! { <span class="meta-tag gray">{id}</span> })}
                    </div>
                    {description.map(|d| view! { <p class="cert-description">{d}</p> })}
                    <div class="cert-actions">
                        {match url {
                            Some(href) => view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="action-button action-primary">
                                    "🔗 View Verified Credential"
                                </a>
                            }
                            .into_any(),
                            None => view! {
                                <span class="action-button action-secondary">"📄 Credential Details"</span>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CertificationsPage() -> impl IntoView {
    let viewport = use_viewport();
    let state = use_fallback_load(
        "certifications",
        |api: ApiClient| async move { api.fetch_certifications().await },
        data::certifications,
    );
    let hovered = RwSignal::new(None::<usize>);
    let items = Memo::new(move |_| state.with(|s| sorted_by_order(s.items())));
    let stats = Memo::new(move |_| items.with(|i| cert_stats(i)));
    let flow = Signal::derive(move || flow_from_scroll(viewport.scroll_y().get(), FLOW_SPAN));

    view! {
        <style>{STYLES}</style>
        <div class="page-root certifications-container">
            <div class="waterfall-container full">
                <WaterfallCanvas config=WaterfallConfig::certifications() flow=flow />
            </div>
            <div class="noise-overlay"></div>
            <div class="waterfall-flow-indicator" style=move || format!("width: {:.2}%", flow.get() * 100.0)></div>

            <div class="main-content">
                <div class="page-header">
                    <h1 class="page-title">"Professional Credentials"</h1>
                    <p class="page-subtitle">
                        "Official certifications and learning milestones that validate my expertise and dedication to continuous growth in software engineering."
                    </p>
                </div>

                <div class="stats-bar">
                    <div class="stat-item">
                        <div class="stat-number">{move || stats.get().total}</div>
                        <div class="stat-label">"Total Certifications"</div>
                    </div>
                    <div class="stat-item">
                        <div class="stat-number">{move || stats.get().issuers}</div>
                        <div class="stat-label">"Different Issuers"</div>
                    </div>
                    <div class="stat-item">
                        <div class="stat-number">{move || stats.get().verified}</div>
                        <div class="stat-label">"Verified Credentials"</div>
                    </div>
                </div>

                {move || match state.get() {
                    LoadState::Loading => {
                        view! { <LoadingPanel message="Loading professional credentials..." /> }.into_any()
                    }
                    LoadState::Failed(message) => {
                        view! { <ErrorPanel title="Unable to Load Credentials" message=message /> }.into_any()
                    }
                    LoadState::Ready { .. } if items.with(Vec::is_empty) => view! {
                        <EmptyPanel message="No certifications yet. Professional certifications and credentials will be displayed here as they are added." />
                    }
                    .into_any(),
                    LoadState::Ready { .. } => view! {
                        <div class="certifications-grid">
                            {items
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, cert)| view! { <CertCard cert=cert index=index hovered=hovered /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

const STYLES: &str = r#"
.certifications-container { font-family: 'Space Grotesk', sans-serif; }
.stats-bar { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-bottom: 4rem; }
.stat-item {
  padding: 2rem; text-align: center; border-radius: 22px; animation: fadeUp 0.6s ease both;
  background: linear-gradient(135deg, rgba(30, 41, 59, 0.8), rgba(15, 23, 42, 0.9)); border: 1px solid rgba(255, 255, 255, 0.1);
}
.stat-number { font-size: clamp(2.2rem, 4vw, 3.5rem); font-weight: 800; color: #8b5cf6; }
.stat-label { color: #cbd5e1; text-transform: uppercase; letter-spacing: 1.5px; font-size: 0.9rem; }
.certifications-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(min(100%, 480px), 1fr)); gap: 2rem; }
.cert-card {
  border-radius: 24px; padding: 2rem; animation: fadeUp 0.6s ease both; transition: all 0.35s ease;
  background: linear-gradient(135deg, rgba(30, 41, 59, 0.85), rgba(15, 23, 42, 0.92)); border: 1px solid rgba(255, 255, 255, 0.08);
}
.cert-card.hovered { transform: scale(1.03); border-color: rgba(139, 92, 246, 0.45); box-shadow: 0 25px 50px rgba(139, 92, 246, 0.3); }
.cert-content { display: flex; gap: 1.5rem; }
.cert-icon { font-size: 2.6rem; }
.cert-details { display: flex; flex-direction: column; gap: 0.75rem; }
.cert-title { font-size: 1.35rem; color: #f8fafc; }
.cert-issuer { color: #a78bfa; font-weight: 600; }
.cert-meta { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.cert-meta .meta-tag { padding: 0.3rem 0.8rem; border-radius: 999px; font-size: 0.8rem; color: #93c5fd; background: rgba(59, 130, 246, 0.12); }
.cert-meta .meta-tag.gray { color: #cbd5e1; background: rgba(148, 163, 184, 0.12); }
.cert-description { color: #cbd5e1; line-height: 1.65; }
.cert-actions .action-button { display: inline-block; padding: 0.7rem 1.3rem; border-radius: 12px; font-weight: 600; text-decoration: none; }
.cert-actions .action-primary { color: #fff; background: linear-gradient(135deg, #8b5cf6, #3b82f6); }
.cert-actions .action-secondary { color: #94a3b8; border: 1px solid rgba(148, 163, 184, 0.3); }
@media (max-width: 768px) { .stats-bar { grid-template-columns: 1fr; } .cert-content { flex-direction: column; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cert_stats() {
        let mut certs = data::certifications();
        assert_eq!(cert_stats(&certs), CertStats { total: 2, issuers: 2, verified: 0 });

        certs[1].issuer = certs[0].issuer.clone();
        certs[1].credential_url = Some("https://verify.example.com/x".into());
        assert_eq!(cert_stats(&certs), CertStats { total: 2, issuers: 1, verified: 1 });
        assert_eq!(cert_stats(&[]), CertStats::default());
    }
}
