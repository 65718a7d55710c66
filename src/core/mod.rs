pub mod contact;
pub mod resource;
pub mod selection;
pub mod tracking;

#[cfg(test)]
pub(crate) mod stub;

pub use crate::domain::ports::{ConfigProvider, ListResource, SiteBackend};
pub use crate::utils::error::Result;
pub use contact::{ContactField, ContactForm, SubmitResult, SUBMIT_FALLBACK_ERROR};
pub use resource::{DisplayList, Resource, ResourceState};
pub use selection::Selection;
pub use tracking::{track_event, PageTracker, PageView};
