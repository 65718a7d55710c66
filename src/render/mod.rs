//! Server-side rendering of the home page.
//!
//! Sections are Leptos components rendered once to a static HTML string
//! (no hydration). Tab strips render every detail panel and mark the
//! selected one active; a small inline script switches panels in the browser.

pub mod components;
pub mod styles;

use crate::app::HomePage;
use chrono::Datelike;
use components::{
    AboutSection, ContactFormView, ContactSection, Footer, Header, HeroSection, ProductsSection,
    ProjectsSection, ServicesSection, SiteDocument,
};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Knobs that are not part of the page state.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// `<BACKEND_URL>/api` as seen from the browser; `None` leaves the
    /// contact form and page tracking inert
    pub api_base: Option<String>,
    pub copyright_year: i32,
}

impl RenderOptions {
    pub fn contact_endpoint(&self) -> Option<String> {
        self.api_base
            .as_deref()
            .map(|base| format!("{}/contacts", base.trim_end_matches('/')))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            api_base: None,
            copyright_year: chrono::Utc::now().year(),
        }
    }
}

pub fn render_home_page(page: &HomePage) -> String {
    render_home_page_with(page, &RenderOptions::default())
}

pub fn render_home_page_with(page: &HomePage, options: &RenderOptions) -> String {
    let content = page.content();

    // SiteDocument 的 children 是 'static 閉包，傳入的值必須先轉成擁有權
    let title = page.page_view().title.clone();
    let logo = content.company.logo.clone();
    let company = content.company.clone();
    let hero = content.hero.clone();
    let about = content.about.clone();

    let services = page.services_display();
    let services_loading = page.services.loading();
    let services_warning = services.warning.map(str::to_string);
    let services = services.items.to_vec();

    let products = page.products_display();
    let product_index = page.product_selection.effective(products.items.len());
    let products_loading = page.products.loading();
    let products_warning = products.warning.map(str::to_string);
    let products = products.items.to_vec();
    let product_stats = content.product_stats.clone();

    let projects = page.projects_display();
    let project_index = page.project_selection.effective(projects.items.len());
    let projects_loading = page.projects.loading();
    let projects_warning = projects.warning.map(str::to_string);
    let projects = projects.items.to_vec();
    let partners = content.partners.clone();

    let contact = content.contact.clone();
    let service_options = content.contact_service_options();
    let form = ContactFormView::from_form(&page.contact, options.contact_endpoint());
    let api_base = options.api_base.clone();

    let footer = content.footer.clone();
    let footer_services = content.footer_services();
    let footer_products = content.footer_products();
    let year = options.copyright_year;

    let doc = view! {
        <SiteDocument title=title api_base=api_base>
            <Header logo=logo />
            <HeroSection company=company.clone() hero=hero />
            <AboutSection about=about />
            <ServicesSection
                services=services
                loading=services_loading
                warning=services_warning
            />
            <ProductsSection
                products=products
                selected=product_index
                stats=product_stats
                loading=products_loading
                warning=products_warning
            />
            <ProjectsSection
                projects=projects
                selected=project_index
                partners=partners
                loading=projects_loading
                warning=projects_warning
            />
            <ContactSection
                contact=contact
                service_options=service_options
                form=form
            />
            <Footer
                company=company
                footer=footer
                services=footer_services
                products=footer_products
                year=year
            />
        </SiteDocument>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContactField, PageView};

    fn page() -> HomePage {
        HomePage::new(PageView::new("/", "PT Mabra Technology Solutions"))
    }

    #[test]
    fn unmounted_page_shows_loading_skeletons() {
        let html = render_home_page(&page());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Loading Services..."));
        assert!(html.contains("Loading Products..."));
        assert!(html.contains("Loading Projects..."));
        // 靜態區塊不受載入狀態影響
        assert!(html.contains("Tentang Mabratech"));
        assert!(html.contains("Send us a Message"));
    }

    #[test]
    fn footer_uses_given_year_and_shared_lists() {
        let options = RenderOptions {
            api_base: Some("https://api.example.com/api/".to_string()),
            copyright_year: 2031,
        };
        let html = render_home_page_with(&page(), &options);

        assert!(html.contains("2031 PT Mabra Technology Solutions. All rights reserved."));
        assert!(html.contains("RTRW-Online"));
        assert!(html.contains("https://api.example.com/api/contacts"));
        assert!(html.contains("/analytics/page-view"));
    }

    #[test]
    fn form_values_are_rendered() {
        let mut page = page();
        page.contact.set(ContactField::Name, "Rina Wijaya");
        page.contact.set(ContactField::Service, "Web Development");

        let html = render_home_page(&page);
        assert!(html.contains("Rina Wijaya"));
    }
}
