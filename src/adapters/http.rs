use crate::domain::model::{AnalyticsEvent, ContactResponse, ContactSubmission};
use crate::domain::ports::{ConfigProvider, ListResource, SiteBackend};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body the backend sends with a non-2xx status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// HTTP client bound to one backend. Built once and passed by reference to
/// every data-access call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// `api_base` is the full API root, e.g. `http://localhost:8001/api`.
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(api_base).map_err(|e| SiteError::InvalidConfigValueError {
            field: "backend.url".to_string(),
            value: api_base.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        // 確保 join 時保留 /api 前綴
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| SiteError::ConfigError {
                message: format!("Cannot build URL for {}: {}", path, e),
            })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// POST that only checks the status; the 2xx body is handed back unparsed.
    pub async fn post_raw<B>(&self, path: &str, body: &B) -> Result<Vec<u8>>
    where
        B: serde::Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        Self::success_body(response).await
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = Self::success_body(response).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn success_body(response: Response) -> Result<Vec<u8>> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(SiteError::ServerError {
                status: status.as_u16(),
                detail: extract_detail(&bytes),
            });
        }

        Ok(bytes.to_vec())
    }
}

/// `detail` may be a string or, for request validation failures, a list of
/// `{ "msg": ... }` objects.
fn extract_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) => Some(detail),
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string)
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl SiteBackend for ApiClient {
    async fn fetch_list<T: ListResource>(&self) -> Result<Vec<T>> {
        let mut body: serde_json::Value = self.get_json(T::PATH).await?;

        // 缺少對應 key 時視為空清單
        match body.get_mut(T::KEY).map(serde_json::Value::take) {
            Some(serde_json::Value::Null) | None => Ok(Vec::new()),
            Some(items) => Ok(serde_json::from_value(items)?),
        }
    }

    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<ContactResponse> {
        let bytes = self.post_raw("/contacts", submission).await?;

        // 2xx 即表示已收到，回應內容無法解析時仍視為成功
        match serde_json::from_slice(&bytes) {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::debug!("Contact accepted with an unreadable body: {}", e);
                Ok(ContactResponse::accepted())
            }
        }
    }

    async fn track_event(&self, event: &AnalyticsEvent) -> Result<()> {
        self.post_raw("/analytics/page-view", event).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_keeps_api_prefix() {
        let client = ApiClient::new("http://localhost:8001/api", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            client.endpoint("/services").unwrap().as_str(),
            "http://localhost:8001/api/services"
        );
        assert_eq!(
            client.endpoint("analytics/page-view").unwrap().as_str(),
            "http://localhost:8001/api/analytics/page-view"
        );
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = ApiClient::new("not a url", DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn detail_shapes() {
        assert_eq!(
            extract_detail(br#"{"detail": "Contact not found"}"#).as_deref(),
            Some("Contact not found")
        );
        assert_eq!(
            extract_detail(br#"{"detail": [{"msg": "field required"}, {"msg": "value is not a valid email address"}]}"#)
                .as_deref(),
            Some("field required; value is not a valid email address")
        );
        assert_eq!(extract_detail(br#"{"error": "boom"}"#), None);
        assert_eq!(extract_detail(b"<html>502</html>"), None);
    }
}
