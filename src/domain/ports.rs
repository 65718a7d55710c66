use crate::content::FallbackContent;
use crate::domain::model::{AnalyticsEvent, ContactResponse, ContactSubmission, Product, Project, Service};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    /// `<BACKEND_URL>/api`
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn page_title(&self) -> &str;
    fn page_path(&self) -> &str;
    fn referrer(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// A list the backend serves as `{ "<KEY>": [ ... ] }` from `GET <PATH>`.
pub trait ListResource: DeserializeOwned + Clone + Send + Sync + 'static {
    const PATH: &'static str;
    const KEY: &'static str;

    fn fallback(content: &FallbackContent) -> &[Self];
}

impl ListResource for Service {
    const PATH: &'static str = "/services";
    const KEY: &'static str = "services";

    fn fallback(content: &FallbackContent) -> &[Self] {
        &content.services
    }
}

impl ListResource for Product {
    const PATH: &'static str = "/products";
    const KEY: &'static str = "products";

    fn fallback(content: &FallbackContent) -> &[Self] {
        &content.products
    }
}

impl ListResource for Project {
    const PATH: &'static str = "/projects";
    const KEY: &'static str = "projects";

    fn fallback(content: &FallbackContent) -> &[Self] {
        &content.projects
    }
}

#[async_trait]
pub trait SiteBackend: Send + Sync {
    async fn fetch_list<T: ListResource>(&self) -> Result<Vec<T>>;
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<ContactResponse>;
    async fn track_event(&self, event: &AnalyticsEvent) -> Result<()>;
}
