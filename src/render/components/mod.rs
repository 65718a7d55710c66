//! Leptos components for the home page.
//!
//! ```text
//! SiteDocument
//! ├── Header
//! ├── HeroSection
//! ├── AboutSection
//! ├── ServicesSection      (LoadingSection | cards + FallbackNotice)
//! ├── ProductsSection      (LoadingSection | TabBar + panels + stats)
//! ├── ProjectsSection      (LoadingSection | TabBar + panels + partners)
//! ├── ContactSection       (info cards + form)
//! └── Footer
//! ```

mod about;
mod contact;
mod document;
mod footer;
mod header;
mod hero;
mod icons;
mod products;
mod projects;
mod services;
mod status;
mod tabs;

pub use about::AboutSection;
pub use contact::{ContactFormView, ContactSection};
pub use document::SiteDocument;
pub use footer::Footer;
pub use header::Header;
pub use hero::HeroSection;
pub use icons::IconGlyph;
pub use products::ProductsSection;
pub use projects::ProjectsSection;
pub use services::ServicesSection;
pub use status::{FallbackNotice, LoadingSection};
pub use tabs::TabBar;
