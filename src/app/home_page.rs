use crate::content::FallbackContent;
use crate::core::{
    ContactForm, DisplayList, ListResource, PageTracker, PageView, Resource, Selection, SiteBackend,
};
use crate::domain::model::{Product, Project, Service};

/// The page root: owns every section's state for one mount.
#[derive(Debug)]
pub struct HomePage {
    content: &'static FallbackContent,
    view: PageView,
    tracker: PageTracker,
    pub services: Resource<Service>,
    pub products: Resource<Product>,
    pub projects: Resource<Project>,
    pub product_selection: Selection,
    pub project_selection: Selection,
    pub contact: ContactForm,
}

impl HomePage {
    pub fn new(view: PageView) -> Self {
        Self::with_content(FallbackContent::shared(), view)
    }

    pub fn with_content(content: &'static FallbackContent, view: PageView) -> Self {
        Self {
            content,
            view,
            tracker: PageTracker::new(),
            services: Resource::new(),
            products: Resource::new(),
            projects: Resource::new(),
            product_selection: Selection::default(),
            project_selection: Selection::default(),
            contact: ContactForm::new(),
        }
    }

    pub fn content(&self) -> &'static FallbackContent {
        self.content
    }

    pub fn page_view(&self) -> &PageView {
        &self.view
    }

    pub fn page_view_tracked(&self) -> bool {
        self.tracker.fired()
    }

    /// Runs the mount effects: the page-view event and the three list fetches,
    /// all concurrently. Calling it again on the same page does nothing new.
    pub async fn mount<B: SiteBackend>(&mut self, backend: &B) {
        let Self {
            view,
            tracker,
            services,
            products,
            projects,
            ..
        } = self;

        tokio::join!(
            tracker.track_once(backend, &*view),
            services.load(backend),
            products.load(backend),
            projects.load(backend),
        );

        tracing::info!(
            "Home page mounted (services: {}, products: {}, projects: {})",
            source_label(&self.services),
            source_label(&self.products),
            source_label(&self.projects),
        );
    }

    pub fn services_display(&self) -> DisplayList<'_, Service> {
        self.display(&self.services)
    }

    pub fn products_display(&self) -> DisplayList<'_, Product> {
        self.display(&self.products)
    }

    pub fn projects_display(&self) -> DisplayList<'_, Project> {
        self.display(&self.projects)
    }

    fn display<'a, T: ListResource>(&'a self, resource: &'a Resource<T>) -> DisplayList<'a, T> {
        resource.display(T::fallback(self.content))
    }

    pub fn current_product(&self) -> Option<&Product> {
        self.product_selection.current(self.products_display().items)
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.project_selection.current(self.projects_display().items)
    }

    pub fn render(&self) -> String {
        crate::render::render_home_page(self)
    }
}

fn source_label<T: ListResource>(resource: &Resource<T>) -> &'static str {
    if resource.loading() {
        "loading"
    } else if resource.error().is_some() {
        "fallback (error)"
    } else if resource.data().is_empty() {
        "fallback (empty)"
    } else {
        "live"
    }
}
