use crate::domain::model::{AnalyticsEvent, EventType};
use crate::domain::ports::SiteBackend;

/// Where the visitor is and how they got there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub path: String,
    pub title: String,
    pub referrer: String,
}

impl PageView {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            referrer: String::new(),
        }
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = referrer.into();
        self
    }

    pub fn to_event(&self) -> AnalyticsEvent {
        AnalyticsEvent::new(EventType::PageView, self.path.clone())
            .with_metadata("title", self.title.clone())
            .with_metadata("referrer", self.referrer.clone())
    }
}

/// Sends one analytics event. Failures are logged and swallowed.
pub async fn track_event<B: SiteBackend>(backend: &B, event: &AnalyticsEvent) {
    if let Err(e) = backend.track_event(event).await {
        tracing::warn!("Analytics tracking failed ({:?} on {}): {}", event.event_type, event.page, e);
    }
}

/// Fires the page-view event at most once per page mount.
#[derive(Debug, Default)]
pub struct PageTracker {
    fired: bool,
}

impl PageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fired(&self) -> bool {
        self.fired
    }

    /// Returns true if this call sent the event.
    pub async fn track_once<B: SiteBackend>(&mut self, backend: &B, view: &PageView) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        track_event(backend, &view.to_event()).await;
        true
    }
}
