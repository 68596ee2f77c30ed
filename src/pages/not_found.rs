use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-root">
            <div class="main-content">
                <div class="page-header">
                    <h1 class="page-title">"404"</h1>
                    <p class="page-subtitle">"This page drifted downstream."</p>
                </div>
                <p style="text-align: center;">
                    <a href="/" style="color: #93c5fd;">"← Back to Home"</a>
                </p>
            </div>
        </div>
    }
}
