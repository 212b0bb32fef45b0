//! Centralized error handling.
//!
//! Every fallible operation in the client returns [`AppError`]. Transport
//! failures (network errors and non-2xx statuses) share this one type so
//! callers never have to tell them apart, except for the 401 case which
//! the gateway reports as [`AppError::Unauthorized`] after logging out.

use reqwest::StatusCode;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    // Transport
    #[error("Request failed with status {status}")]
    Http { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Local environment
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Http { .. } => "HTTP_ERROR",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status reported by the remote API, if the error came from one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::Http { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the user has to sign in again before retrying
    pub fn requires_login(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }

    /// Message suitable for showing to the user.
    ///
    /// For HTTP errors the API's `detail` field is preferred over the raw body.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http { status, body } => match extract_detail(body) {
                Some(detail) => format!("{} ({})", detail, status),
                None if body.is_empty() => self.to_string(),
                None => format!("{}: {}", self, body),
            },
            AppError::Unauthorized => "Session expired or invalid, please log in again".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Pull the `detail` message out of an API error body
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(format_validation_errors(&errors))
    }
}

/// Flatten validation errors into a single readable message
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
