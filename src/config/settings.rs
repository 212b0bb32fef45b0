//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

use super::constants::{
    DEFAULT_API_URL, ENV_LEGACY_API_URL, ENV_PUBLIC_API_URL, STORAGE_DIR_NAME, STORAGE_FILE_NAME,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote API, without trailing slash
    pub api_url: String,
    /// Location of the durable storage file (`None` = storage unavailable)
    pub storage_path: Option<PathBuf>,
    /// Whether tokens are decoded client-side to check their expiry
    pub client_expiry_check: bool,
    /// Explicit dark/light system preference, overriding terminal detection
    pub prefers_dark: Option<bool>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// API URL sources in priority order: `HOTEL_PUBLIC_API_URL`,
    /// `API_BASE_URL`, then the local default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_url: resolve_api_url(
                env::var(ENV_PUBLIC_API_URL).ok(),
                env::var(ENV_LEGACY_API_URL).ok(),
            ),
            storage_path: env::var("HOTEL_STORAGE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .or_else(default_storage_path),
            client_expiry_check: env::var("HOTEL_CLIENT_EXPIRY_CHECK")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
            prefers_dark: env::var("HOTEL_THEME_PREFERS_DARK")
                .ok()
                .and_then(|v| parse_flag(&v)),
        }
    }

    /// Override the API base URL (e.g. from a CLI flag).
    ///
    /// Unlike the environment, an explicit URL without an http(s) scheme is
    /// an error rather than a silent fallback.
    pub fn with_api_url(mut self, url: impl Into<String>) -> AppResult<Self> {
        let url = url.into();
        self.api_url = parse_base_url(&url).ok_or_else(|| {
            AppError::config(format!(
                "API URL must start with http:// or https://, got '{}'",
                url.trim()
            ))
        })?;
        Ok(self)
    }

    /// Override the storage location
    pub fn with_storage_path(mut self, path: Option<PathBuf>) -> Self {
        self.storage_path = path;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_path: None,
            client_expiry_check: true,
            prefers_dark: None,
        }
    }
}

/// Pick the first non-empty candidate, falling back to the default URL
fn resolve_api_url(public: Option<String>, legacy: Option<String>) -> String {
    [public, legacy]
        .into_iter()
        .flatten()
        .map(|url| url.trim().to_string())
        .find(|url| !url.is_empty())
        .map(|url| normalize_base_url(&url))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn parse_base_url(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    (trimmed.starts_with("http://") || trimmed.starts_with("https://")).then(|| trimmed.to_string())
}

fn normalize_base_url(url: &str) -> String {
    parse_base_url(url).unwrap_or_else(|| {
        tracing::warn!("Ignoring API URL without http(s) scheme: {}", url);
        DEFAULT_API_URL.to_string()
    })
}

fn default_storage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(STORAGE_DIR_NAME).join(STORAGE_FILE_NAME))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
