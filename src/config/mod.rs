#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::DEFAULT_TIMEOUT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_PAGE_TITLE: &str = "PT Mabra Technology Solutions";
pub const DEFAULT_OUTPUT_PATH: &str = "./dist";

/// Values given on the command line; each one beats the site file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub backend_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub page_title: Option<String>,
    pub page_path: Option<String>,
    pub referrer: Option<String>,
    pub output_path: Option<String>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    backend_url: String,
    api_base_url: String,
    timeout: Duration,
    page_title: String,
    page_path: String,
    referrer: String,
    output_path: String,
}

impl SiteSettings {
    pub fn new(backend_url: &str) -> Self {
        Self::resolve(None, Overrides {
            backend_url: Some(backend_url.to_string()),
            ..Default::default()
        })
    }

    /// CLI flags first, then the site file, then built-in defaults.
    pub fn resolve(file: Option<&TomlConfig>, overrides: Overrides) -> Self {
        let file = file.cloned().unwrap_or_default();

        let backend_url = overrides
            .backend_url
            .or(file.backend.url)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let backend_url = backend_url.trim().trim_end_matches('/').to_string();
        let api_base_url = format!("{}/api", backend_url);

        let timeout = overrides
            .timeout_seconds
            .or(file.backend.timeout_seconds)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            backend_url,
            api_base_url,
            timeout,
            page_title: overrides
                .page_title
                .or(file.page.title)
                .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string()),
            page_path: overrides
                .page_path
                .or(file.page.path)
                .unwrap_or_else(|| "/".to_string()),
            referrer: overrides.referrer.or(file.page.referrer).unwrap_or_default(),
            output_path: overrides
                .output_path
                .or(file.output.path)
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

impl ConfigProvider for SiteSettings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
    }

    fn page_title(&self) -> &str {
        &self.page_title
    }

    fn page_path(&self) -> &str {
        &self.page_path
    }

    fn referrer(&self) -> &str {
        &self.referrer
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for SiteSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("backend.url", &self.backend_url)?;
        validation::validate_positive_number("backend.timeout_seconds", self.timeout.as_secs(), 1)?;
        validation::validate_non_empty_string("page.title", &self.page_title)?;
        validation::validate_page_path("page.path", &self.page_path)?;
        validation::validate_path("output.path", &self.output_path)?;
        Ok(())
    }
}
