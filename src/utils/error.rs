use thiserror::Error;

/// 後端未提供訊息時的預設顯示文字
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    ServerError { status: u16, detail: Option<String> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl SiteError {
    /// 伺服器回傳的 `detail` 欄位 (若有)
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            SiteError::ServerError {
                detail: Some(detail),
                ..
            } => Some(detail.as_str()),
            _ => None,
        }
    }

    /// 收斂成單一顯示字串: detail → 錯誤本身 → 通用訊息
    pub fn display_message(&self) -> String {
        if let Some(detail) = self.server_detail() {
            return detail.to_string();
        }

        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SiteError::ApiError(e) if e.is_timeout())
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::ApiError(e) if e.is_timeout() => {
                "The backend did not answer in time; check that it is reachable or raise --timeout-seconds"
            }
            SiteError::ApiError(_) => "Check BACKEND_URL and that the backend is running",
            SiteError::ServerError { status, .. } if *status >= 500 => {
                "The backend reported an internal error; try again later"
            }
            SiteError::ServerError { .. } => "Review the submitted data and try again",
            SiteError::IoError(_) => "Check that the output directory is writable",
            SiteError::SerializationError(_) => "The backend returned an unexpected payload",
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => {
                "Fix the site configuration file or command line flags"
            }
            SiteError::ValidationError { .. } => "Fill in every required field",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
