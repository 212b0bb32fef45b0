//! Session token value object and client-side expiry inspection.
//!
//! Tokens are JWT-like: `header.payload.signature`, each segment base64url.
//! Only the payload is inspected, and only for its `exp` claim. The signature
//! is never checked here; the API remains the authority on rejection.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use chrono::Utc;
use serde_json::Value;

use crate::config::BEARER_TOKEN_PREFIX;

const DECODE_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// base64url, padding optional
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, DECODE_CONFIG);

/// Standard alphabet, padding optional
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, DECODE_CONFIG);

/// Whether the client is able to decode token payloads.
///
/// With [`ExpiryCheck::Unavailable`] every present token is reported valid,
/// which leaves expiry enforcement entirely to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpiryCheck {
    #[default]
    Enforced,
    Unavailable,
}

impl ExpiryCheck {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            ExpiryCheck::Enforced
        } else {
            ExpiryCheck::Unavailable
        }
    }
}

/// Bearer token as issued by the token endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

// Don't leak the credential into logs
impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("{}{}", BEARER_TOKEN_PREFIX, self.0)
    }

    /// Decode the payload segment as JSON.
    ///
    /// Returns `None` when there is no second segment, the segment is not
    /// base64, or the bytes are not JSON.
    pub fn payload(&self) -> Option<Value> {
        let segment = self.0.split('.').nth(1)?;
        let bytes = URL_SAFE_LENIENT
            .decode(segment)
            .or_else(|_| STANDARD_LENIENT.decode(segment))
            .ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// The `exp` claim, if the payload carries a numeric one
    pub fn expires_at(&self) -> Option<f64> {
        self.payload()?.get("exp")?.as_f64()
    }

    /// Whether `exp` lies strictly after `now` (Unix seconds)
    pub fn is_valid_at(&self, now: i64) -> bool {
        match self.expires_at() {
            Some(exp) => exp > now as f64,
            None => false,
        }
    }

    /// Validity against the current clock, honoring the decode capability
    pub fn is_valid(&self, check: ExpiryCheck) -> bool {
        match check {
            ExpiryCheck::Unavailable => true,
            ExpiryCheck::Enforced => self.is_valid_at(Utc::now().timestamp()),
        }
    }
}

impl From<String> for SessionToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for SessionToken {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
