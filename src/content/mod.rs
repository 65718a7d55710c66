//! Static site content shared by every section.
//!
//! One embedded TOML asset holds the company profile and the fallback
//! service/product/project lists, so the footer, the contact form's service
//! picker and the list sections can never drift apart.

use crate::domain::icon::Icon;
use crate::domain::model::{Product, Project, Service};
use crate::utils::error::{Result, SiteError};
use serde::Deserialize;
use std::sync::LazyLock;

const FALLBACK_TOML: &str = include_str!("../../content/fallback.toml");

static SHARED: LazyLock<FallbackContent> = LazyLock::new(|| match FallbackContent::embedded() {
    Ok(content) => content,
    Err(e) => {
        tracing::error!("Embedded site content is unreadable: {}", e);
        FallbackContent::default()
    }
});

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FallbackContent {
    pub company: CompanyProfile,
    pub hero: HeroContent,
    pub about: AboutContent,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub product_stats: Vec<Stat>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub partners: Vec<Partner>,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub short_name: String,
    pub logo: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub highlight: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Highlight {
    pub icon: Icon,
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub overview: Vec<String>,
    #[serde(default)]
    pub facts: Vec<Fact>,
    pub vision: String,
    pub vision_en: String,
    #[serde(default)]
    pub mission: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Partner {
    pub name: String,
    pub industry: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactContent {
    pub intro: String,
    pub general_inquiry: String,
    #[serde(default)]
    pub info: Vec<ContactInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInfo {
    pub icon: Icon,
    pub title: String,
    pub details: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FooterContent {
    #[serde(default)]
    pub about: Vec<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// how many service titles the footer lists
    pub featured_services: usize,
    #[serde(default)]
    pub legal_links: Vec<String>,
}

impl FallbackContent {
    /// Process-wide parsed copy of the embedded asset.
    pub fn shared() -> &'static FallbackContent {
        &SHARED
    }

    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(FALLBACK_TOML)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SiteError::ConfigValidationError {
            field: "content".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Options offered by the contact form: every service title plus a general inquiry.
    pub fn contact_service_options(&self) -> Vec<String> {
        self.services
            .iter()
            .map(|s| s.title.clone())
            .chain(std::iter::once(self.contact.general_inquiry.clone()))
            .filter(|option| !option.is_empty())
            .collect()
    }

    pub fn footer_services(&self) -> Vec<String> {
        self.services
            .iter()
            .take(self.footer.featured_services)
            .map(|s| s.title.clone())
            .collect()
    }

    pub fn footer_products(&self) -> Vec<String> {
        self.products.iter().map(|p| p.title.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProductFeature;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_asset_parses() {
        let content = FallbackContent::embedded().unwrap();

        assert_eq!(content.company.name, "PT Mabra Technology Solutions");
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.products.len(), 4);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.partners.len(), 2);
        assert_eq!(content.contact.info.len(), 4);
        assert_eq!(content.hero.stats.len(), 3);
    }

    #[test]
    fn mixed_product_features_survive_toml() {
        let content = FallbackContent::embedded().unwrap();
        let patrol = &content.products[2];

        assert_eq!(patrol.title, "Patrol System");
        assert!(matches!(
            patrol.features[0],
            ProductFeature::Detailed {
                icon: Some(Icon::MapPin),
                ..
            }
        ));
        assert_eq!(
            patrol.features[4],
            ProductFeature::Plain("Real-time reporting".to_string())
        );
    }

    #[test]
    fn derived_lists_follow_the_service_catalogue() {
        let content = FallbackContent::embedded().unwrap();

        assert_eq!(
            content.contact_service_options(),
            vec![
                "ERP Systems",
                "Payroll Management",
                "Web Development",
                "Mobile Applications",
                "System Integration",
                "IT Consulting",
                "General Inquiry",
            ]
        );
        assert_eq!(content.footer_services().len(), 4);
        assert_eq!(
            content.footer_products(),
            vec!["Mabra Payroll", "DYRECS Vatriot", "Patrol System", "RTRW-Online"]
        );
    }

    #[test]
    fn shared_copy_is_populated() {
        assert!(!FallbackContent::shared().projects.is_empty());
    }

    #[test]
    fn broken_asset_is_reported() {
        assert!(FallbackContent::from_toml_str("[company]\nname = ").is_err());
    }
}
