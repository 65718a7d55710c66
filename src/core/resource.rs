use crate::domain::ports::{ListResource, SiteBackend};
use crate::utils::error::Result;

/// `Idle → Loading → Ready | Failed`. The first resolution is final.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    Idle,
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

/// What a section should draw for one list resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayList<'a, T> {
    pub items: &'a [T],
    pub from_fallback: bool,
    /// set only when the fetch failed
    pub warning: Option<&'a str>,
}

/// Loading/error/data for one backend list (services, products or projects).
#[derive(Debug, Clone)]
pub struct Resource<T: ListResource> {
    state: ResourceState<T>,
}

impl<T: ListResource> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListResource> Resource<T> {
    pub fn new() -> Self {
        Self {
            state: ResourceState::Idle,
        }
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    /// True until the fetch resolves, including before it starts.
    pub fn loading(&self) -> bool {
        matches!(self.state, ResourceState::Idle | ResourceState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ResourceState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Fetched records; empty unless the fetch succeeded.
    pub fn data(&self) -> &[T] {
        match &self.state {
            ResourceState::Ready(items) => items,
            _ => &[],
        }
    }

    /// Returns false if the resource already left `Idle`.
    pub fn begin(&mut self) -> bool {
        if matches!(self.state, ResourceState::Idle) {
            self.state = ResourceState::Loading;
            true
        } else {
            false
        }
    }

    /// Applies the fetch outcome. Ignored unless the resource is `Loading`.
    pub fn resolve(&mut self, outcome: Result<Vec<T>>) {
        if !matches!(self.state, ResourceState::Loading) {
            tracing::debug!("Ignoring late result for {}", T::KEY);
            return;
        }

        self.state = match outcome {
            Ok(items) => {
                tracing::debug!("Loaded {} {}", items.len(), T::KEY);
                ResourceState::Ready(items)
            }
            Err(e) if e.is_timeout() => {
                tracing::warn!("Loading {} timed out: {}", T::KEY, e);
                ResourceState::Failed(e.display_message())
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", T::KEY, e);
                ResourceState::Failed(e.display_message())
            }
        };
    }

    /// Issues the single GET for this resource.
    pub async fn load<B: SiteBackend>(&mut self, backend: &B) {
        if !self.begin() {
            return;
        }
        let outcome = backend.fetch_list::<T>().await;
        self.resolve(outcome);
    }

    /// Fetched list when it is non-empty, otherwise `fallback`.
    pub fn display<'a>(&'a self, fallback: &'a [T]) -> DisplayList<'a, T> {
        let data = self.data();
        if !data.is_empty() {
            return DisplayList {
                items: data,
                from_fallback: false,
                warning: None,
            };
        }

        DisplayList {
            items: fallback,
            from_fallback: true,
            warning: self.error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FallbackContent;
    use crate::core::stub::StubBackend;
    use crate::domain::model::{Product, Project, Service};
    use crate::utils::error::SiteError;
    use serde_json::json;

    fn project(title: &str) -> serde_json::Value {
        json!({
            "title": title,
            "client": "PT Contoh",
            "category": "Testing",
            "description": "Proyek uji",
            "features": [],
            "technologies": ["Rust"],
            "duration": "1 month",
            "year": "2024",
            "status": "Completed",
            "icon": "Building"
        })
    }

    #[tokio::test]
    async fn fetched_list_replaces_fallback() {
        let backend = StubBackend::new().with_list("/projects", json!({
            "projects": [project("Sistem Inventori"), project("Portal HR")],
            "total": 2
        }));
        let fallback = &FallbackContent::shared().projects;

        let mut projects = Resource::<Project>::new();
        assert!(projects.loading());
        projects.load(&backend).await;

        assert!(!projects.loading());
        let shown = projects.display(fallback);
        assert!(!shown.from_fallback);
        assert!(shown.warning.is_none());
        assert_eq!(shown.items.len(), 2);
        assert_eq!(shown.items[0].title, "Sistem Inventori");
    }

    #[tokio::test]
    async fn failure_shows_fallback_with_warning() {
        let backend = StubBackend::new().with_failure("/services", 503, Some("Service unavailable"));
        let fallback = &FallbackContent::shared().services;

        let mut services = Resource::<Service>::new();
        services.load(&backend).await;

        assert_eq!(services.error(), Some("Service unavailable"));
        assert!(services.data().is_empty());
        let shown = services.display(fallback);
        assert!(shown.from_fallback);
        assert_eq!(shown.items, fallback.as_slice());
        assert_eq!(shown.warning, Some("Service unavailable"));
    }

    #[tokio::test]
    async fn empty_success_uses_fallback_quietly() {
        let backend = StubBackend::new().with_list("/products", json!({ "products": [] }));
        let fallback = &FallbackContent::shared().products;

        let mut products = Resource::<Product>::new();
        products.load(&backend).await;

        let shown = products.display(fallback);
        assert!(shown.from_fallback);
        assert!(shown.warning.is_none());
        assert_eq!(shown.items.len(), fallback.len());
    }

    #[tokio::test]
    async fn resolution_is_terminal() {
        let backend = StubBackend::new().with_list("/services", json!({ "services": [] }));

        let mut services = Resource::<Service>::new();
        services.load(&backend).await;
        assert_eq!(services.state(), &ResourceState::Ready(vec![]));

        // 已結束的資源不會再次發出請求
        services.load(&backend).await;
        assert_eq!(backend.list_calls("/services"), 1);

        services.resolve(Err(SiteError::ServerError {
            status: 500,
            detail: None,
        }));
        assert!(services.error().is_none());
    }

    #[test]
    fn resolve_before_begin_is_ignored() {
        let mut services = Resource::<Service>::new();
        services.resolve(Ok(vec![]));
        assert_eq!(services.state(), &ResourceState::Idle);
        assert!(services.begin());
        assert!(!services.begin());
    }
}
