use crate::domain::icon::Icon;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub icon: Icon,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Product features are either a bare line of text or text with its own icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductFeature {
    Plain(String),
    Detailed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<Icon>,
        text: String,
    },
}

impl ProductFeature {
    pub fn text(&self) -> &str {
        match self {
            ProductFeature::Plain(text) => text,
            ProductFeature::Detailed { text, .. } => text,
        }
    }

    /// Plain features are drawn with a chevron bullet.
    pub fn icon(&self) -> Icon {
        match self {
            ProductFeature::Detailed {
                icon: Some(icon), ..
            } => *icon,
            _ => Icon::ChevronRight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub icon: Icon,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<ProductFeature>,
    /// gradient style token, e.g. `from-green-500 to-emerald-600`
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub icon: Icon,
    pub title: String,
    pub client: String,
    #[serde(default)]
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub service: String,
    pub message: String,
}

impl ContactSubmission {
    /// 去除前後空白，空白的選填欄位視為未填
    pub fn normalized(&self) -> Self {
        let optional = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            company: optional(&self.company),
            service: self.service.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Shown when the backend accepts a message without a readable reply.
pub const DEFAULT_CONTACT_SUCCESS: &str = "Terima kasih! Pesan Anda telah berhasil dikirim.";

impl ContactResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: DEFAULT_CONTACT_SUCCESS.to_string(),
            id: None,
        }
    }
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    PageView,
    ContactForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub page: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl AnalyticsEvent {
    pub fn new(event_type: EventType, page: impl Into<String>) -> Self {
        Self {
            event_type,
            page: page.into(),
            metadata: serde_json::Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn product_features_accept_mixed_shapes() {
        let product: Product = serde_json::from_value(json!({
            "id": "p-1",
            "icon": "Shield",
            "title": "Patrol System",
            "subtitle": "Mobile Security Patrol Application",
            "description": "Aplikasi patroli",
            "features": [
                {"icon": "MapPin", "text": "GPS Location Tracking"},
                "Real-time reporting",
                {"text": "Route optimization"}
            ],
            "color": "from-red-500 to-orange-600",
            "is_active": true,
            "order": 3
        }))
        .unwrap();

        assert_eq!(product.features.len(), 3);
        assert_eq!(product.features[0].icon(), Icon::MapPin);
        assert_eq!(product.features[0].text(), "GPS Location Tracking");
        assert_eq!(product.features[1].icon(), Icon::ChevronRight);
        assert_eq!(product.features[2].icon(), Icon::ChevronRight);
        assert_eq!(product.features[2].text(), "Route optimization");
    }

    #[test]
    fn unknown_project_icon_falls_back() {
        let project: Project = serde_json::from_value(json!({
            "title": "Accounting Application",
            "client": "PT Sinar Panca Mitra Indonesia",
            "description": "Sistem akuntansi",
            "icon": "Briefcase"
        }))
        .unwrap();

        assert_eq!(project.icon, Icon::Calculator);
        assert!(project.technologies.is_empty());
    }

    #[test]
    fn contact_submission_omits_blank_optionals() {
        let submission = ContactSubmission {
            name: " Budi ".into(),
            email: "budi@example.com".into(),
            phone: Some("   ".into()),
            company: Some("PT Maju".into()),
            service: "ERP Systems".into(),
            message: "Kami butuh sistem ERP".into(),
        };

        let body = serde_json::to_value(submission.normalized()).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Budi",
                "email": "budi@example.com",
                "company": "PT Maju",
                "service": "ERP Systems",
                "message": "Kami butuh sistem ERP"
            })
        );
    }

    #[test]
    fn analytics_event_uses_type_key() {
        let event = AnalyticsEvent::new(EventType::PageView, "/")
            .with_metadata("title", "Mabratech")
            .with_metadata("referrer", "");

        let body = serde_json::to_value(&event).unwrap();
        assert_eq!(body["type"], "page_view");
        assert_eq!(body["page"], "/");
        assert_eq!(body["metadata"]["title"], "Mabratech");
    }
}
