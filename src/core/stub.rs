//! In-memory backend for unit tests.

use crate::domain::model::{AnalyticsEvent, ContactResponse, ContactSubmission};
use crate::domain::ports::{ListResource, SiteBackend};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

type Failure = (u16, Option<String>);

#[derive(Default)]
pub(crate) struct StubBackend {
    lists: HashMap<&'static str, std::result::Result<serde_json::Value, Failure>>,
    contact: Option<std::result::Result<String, Failure>>,
    analytics_fails: bool,
    list_calls: Mutex<HashMap<String, usize>>,
    contact_calls: Mutex<Vec<ContactSubmission>>,
    events: Mutex<Vec<AnalyticsEvent>>,
    event_attempts: Mutex<usize>,
}

fn server_error((status, detail): &Failure) -> SiteError {
    SiteError::ServerError {
        status: *status,
        detail: detail.clone(),
    }
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, path: &'static str, body: serde_json::Value) -> Self {
        self.lists.insert(path, Ok(body));
        self
    }

    pub fn with_failure(mut self, path: &'static str, status: u16, detail: Option<&str>) -> Self {
        self.lists
            .insert(path, Err((status, detail.map(str::to_string))));
        self
    }

    pub fn with_contact_reply(mut self, message: &str) -> Self {
        self.contact = Some(Ok(message.to_string()));
        self
    }

    pub fn with_contact_failure(mut self, status: u16, detail: Option<&str>) -> Self {
        self.contact = Some(Err((status, detail.map(str::to_string))));
        self
    }

    pub fn with_failing_analytics(mut self) -> Self {
        self.analytics_fails = true;
        self
    }

    pub fn list_calls(&self, path: &str) -> usize {
        self.list_calls
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or(0)
    }

    pub fn contact_calls(&self) -> usize {
        self.contact_calls.lock().unwrap().len()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_attempts(&self) -> usize {
        *self.event_attempts.lock().unwrap()
    }
}

#[async_trait]
impl SiteBackend for StubBackend {
    async fn fetch_list<T: ListResource>(&self) -> Result<Vec<T>> {
        *self
            .list_calls
            .lock()
            .unwrap()
            .entry(T::PATH.to_string())
            .or_insert(0) += 1;

        match self.lists.get(T::PATH) {
            Some(Ok(body)) => match body.get(T::KEY) {
                Some(items) => Ok(serde_json::from_value(items.clone())?),
                None => Ok(Vec::new()),
            },
            Some(Err(failure)) => Err(server_error(failure)),
            None => Err(SiteError::ServerError {
                status: 404,
                detail: Some("Not Found".to_string()),
            }),
        }
    }

    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<ContactResponse> {
        self.contact_calls.lock().unwrap().push(submission.clone());
        match &self.contact {
            Some(Ok(message)) => Ok(ContactResponse {
                success: true,
                message: message.clone(),
                id: Some("contact-1".to_string()),
            }),
            Some(Err(failure)) => Err(server_error(failure)),
            None => Err(SiteError::ServerError {
                status: 404,
                detail: None,
            }),
        }
    }

    async fn track_event(&self, event: &AnalyticsEvent) -> Result<()> {
        *self.event_attempts.lock().unwrap() += 1;
        if self.analytics_fails {
            return Err(SiteError::ServerError {
                status: 500,
                detail: Some("analytics down".to_string()),
            });
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}
