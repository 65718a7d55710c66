//! Loading skeleton and the cached-data warning

use leptos::prelude::*;

/// Placeholder shown while a section's list is still being fetched.
#[component]
pub fn LoadingSection(id: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <section id=id class="section loading">
            <div class="container">
                <div class="section-header">
                    <div class="display-large">{format!("Loading {}...", label)}</div>
                </div>
                <div class="skeleton"></div>
            </div>
        </section>
    }
}

/// Non-blocking notice that fallback content is on screen because the fetch failed.
#[component]
pub fn FallbackNotice(resource: &'static str, warning: Option<String>) -> impl IntoView {
    let Some(reason) = warning else {
        return view! {}.into_any();
    };

    view! {
        <div class="fallback-notice" role="status" title=reason>
            {format!("Using cached {} data (API temporarily unavailable)", resource)}
        </div>
    }
    .into_any()
}
