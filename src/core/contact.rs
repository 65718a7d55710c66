use crate::core::tracking::track_event;
use crate::domain::model::{AnalyticsEvent, ContactResponse, ContactSubmission, EventType};
use crate::domain::ports::SiteBackend;
use crate::utils::error::{Result, SiteError};

/// Shown when the backend gives no `detail` for a failed submission.
pub const SUBMIT_FALLBACK_ERROR: &str = "Terjadi kesalahan. Silakan coba lagi.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl ContactField {
    pub const REQUIRED: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Service,
        ContactField::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::Service => "service",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub success: bool,
    pub message: String,
}

/// State behind the contact form: the fields, the in-flight flag and the
/// last result banner.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    submitting: bool,
    result: Option<SubmitResult>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn result(&self) -> Option<&SubmitResult> {
        self.result.as_ref()
    }

    pub fn clear_result(&mut self) {
        self.result = None;
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Phone => self.fields.phone = Some(value),
            ContactField::Company => self.fields.company = Some(value),
            ContactField::Service => self.fields.service = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.fields.name,
            ContactField::Email => &self.fields.email,
            ContactField::Phone => self.fields.phone.as_deref().unwrap_or(""),
            ContactField::Company => self.fields.company.as_deref().unwrap_or(""),
            ContactField::Service => &self.fields.service,
            ContactField::Message => &self.fields.message,
        }
    }

    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.missing_required().is_empty()
    }

    /// Posts the form once.
    ///
    /// On success the fields are cleared, the server's message becomes the
    /// result banner and a `contact_form` analytics event is sent (its failure
    /// is ignored). On failure the fields stay as typed, the banner carries the
    /// server's `detail` or [`SUBMIT_FALLBACK_ERROR`], and the error is returned.
    pub async fn submit<B: SiteBackend>(&mut self, backend: &B) -> Result<ContactResponse> {
        if self.submitting {
            return Err(SiteError::ValidationError {
                message: "A submission is already in progress".to_string(),
            });
        }

        let missing = self.missing_required();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
            return Err(SiteError::ValidationError {
                message: format!("Missing required fields: {}", names.join(", ")),
            });
        }

        self.submitting = true;
        self.result = None;

        let submission = self.fields.normalized();
        let outcome = backend.submit_contact(&submission).await;

        match outcome {
            Ok(response) => {
                tracing::info!("Contact form submitted for {}", submission.email);
                self.result = Some(SubmitResult {
                    success: true,
                    message: response.message.clone(),
                });
                self.fields = ContactSubmission::default();
                self.submitting = false;

                let event = AnalyticsEvent::new(EventType::ContactForm, "contact")
                    .with_metadata("service", submission.service.clone())
                    .with_metadata("company", submission.company.clone());
                track_event(backend, &event).await;

                Ok(response)
            }
            Err(e) => {
                tracing::error!("Contact form submission failed: {}", e);
                let message = e
                    .server_detail()
                    .unwrap_or(SUBMIT_FALLBACK_ERROR)
                    .to_string();
                self.result = Some(SubmitResult {
                    success: false,
                    message,
                });
                self.submitting = false;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stub::StubBackend;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Siti Rahma");
        form.set(ContactField::Email, "siti@contoh.co.id");
        form.set(ContactField::Company, "PT Contoh");
        form.set(ContactField::Service, "ERP Systems");
        form.set(ContactField::Message, "Kami tertarik dengan sistem ERP Anda.");
        form
    }

    #[tokio::test]
    async fn successful_submit_clears_fields() {
        let backend = StubBackend::new().with_contact_reply("Terima kasih! Pesan Anda telah berhasil dikirim.");
        let mut form = filled_form();

        let response = form.submit(&backend).await.unwrap();

        assert_eq!(response.message, "Terima kasih! Pesan Anda telah berhasil dikirim.");
        assert!(!form.submitting());
        assert_eq!(
            form.result(),
            Some(&SubmitResult {
                success: true,
                message: "Terima kasih! Pesan Anda telah berhasil dikirim.".to_string()
            })
        );
        assert_eq!(form.fields(), &ContactSubmission::default());

        let events = backend.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::ContactForm);
        assert_eq!(events[0].metadata["service"], "ERP Systems");
        assert_eq!(events[0].metadata["company"], "PT Contoh");
    }

    #[tokio::test]
    async fn failed_submit_keeps_fields() {
        let backend = StubBackend::new().with_contact_failure(500, Some("Terjadi kesalahan sistem."));
        let mut form = filled_form();
        let before = form.fields().clone();

        let err = form.submit(&backend).await.unwrap_err();

        assert_eq!(err.server_detail(), Some("Terjadi kesalahan sistem."));
        assert!(!form.submitting());
        assert_eq!(form.fields(), &before);
        let result = form.result().unwrap();
        assert!(!result.success);
        assert_eq!(result.message, "Terjadi kesalahan sistem.");
        assert!(backend.events().is_empty());
    }

    #[tokio::test]
    async fn failure_without_detail_uses_localized_message() {
        let backend = StubBackend::new().with_contact_failure(502, None);
        let mut form = filled_form();

        assert!(form.submit(&backend).await.is_err());
        assert_eq!(form.result().unwrap().message, SUBMIT_FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn analytics_failure_does_not_fail_submission() {
        let backend = StubBackend::new()
            .with_contact_reply("OK")
            .with_failing_analytics();
        let mut form = filled_form();

        assert!(form.submit(&backend).await.is_ok());
        assert!(form.result().unwrap().success);
        assert_eq!(backend.event_attempts(), 1);
    }

    #[tokio::test]
    async fn missing_required_fields_block_submit() {
        let backend = StubBackend::new().with_contact_reply("OK");
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Andi");
        form.set(ContactField::Phone, "0812");

        assert!(!form.can_submit());
        assert_eq!(
            form.missing_required(),
            vec![ContactField::Email, ContactField::Service, ContactField::Message]
        );

        let err = form.submit(&backend).await.unwrap_err();
        assert!(matches!(err, SiteError::ValidationError { .. }));
        assert_eq!(backend.contact_calls(), 0);
        assert!(form.result().is_none());
        assert_eq!(form.value(ContactField::Phone), "0812");
    }

    #[tokio::test]
    async fn clear_result_resets_banner() {
        let backend = StubBackend::new().with_contact_reply("OK");
        let mut form = filled_form();
        form.submit(&backend).await.unwrap();

        form.clear_result();
        assert!(form.result().is_none());
    }
}
