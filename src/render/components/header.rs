//! Fixed top bar with section anchors

use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#products", "Products"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header(logo: String) -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="#home" class="dark-logo-container">
                <h1 class="company-logo">{logo}</h1>
            </a>
            <nav class="site-nav">
                {NAV_LINKS.iter().map(|(href, label)| view! {
                    <a href=*href class="dark-nav-link">{*label}</a>
                }).collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
