//! Portfolio App
//!
//! Root component: provides app-wide context, installs the shared
//! stylesheet and routes between the pages under a fixed navbar.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Navbar, STATUS_STYLES};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    AboutPage, AwardsPage, CertificationsPage, HomePage, NotFoundPage, ProjectsPage, SkillsPage, BASE_STYLES,
};
use crate::store::provide_viewport;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("API base: {}", config.api_base_url);
    provide_context(AppContext::new(config));
    provide_viewport();

    view! {
        <style>{BASE_STYLES}{STATUS_STYLES}</style>
        <Router>
            <Navbar />
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/skills") view=SkillsPage />
                    <Route path=path!("/certifications") view=CertificationsPage />
                    <Route path=path!("/awards") view=AwardsPage />
                </Routes>
            </main>
        </Router>
    }
}
