//! Footer with company blurb, shared service/product lists and legal links

use super::IconGlyph;
use crate::content::{CompanyProfile, FooterContent};
use crate::domain::icon::Icon;
use leptos::prelude::*;

#[component]
pub fn Footer(
    company: CompanyProfile,
    footer: FooterContent,
    services: Vec<String>,
    products: Vec<String>,
    year: i32,
) -> impl IntoView {
    let copyright = format!("© {} {}. All rights reserved.", year, company.name);

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="company-logo">{company.logo}</h3>
                        {footer.about.into_iter().map(|paragraph| view! {
                            <p class="body-small">{paragraph}</p>
                        }).collect::<Vec<_>>()}
                        <p class="body-small"><IconGlyph icon=Icon::MapPin />{footer.address}</p>
                        <p class="body-small"><IconGlyph icon=Icon::Phone />{footer.phone}</p>
                        <p class="body-small"><IconGlyph icon=Icon::Mail />{footer.email}</p>
                    </div>
                    <div>
                        <h4 class="heading-3">"Services"</h4>
                        <ul class="feature-list">
                            {services.into_iter().map(|title| view! {
                                <li><a href="#services">{title}</a></li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="heading-3">"Products"</h4>
                        <ul class="feature-list">
                            {products.into_iter().map(|title| view! {
                                <li><a href="#products">{title}</a></li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{copyright}</span>
                    {footer.legal_links.into_iter().map(|label| view! {
                        <a href="#" class="dark-nav-link">{label}</a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
