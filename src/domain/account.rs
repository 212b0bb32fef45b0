//! Account registration and token issuance payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of a successful token request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// New account request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Account created by a registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_defaults_type() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_register_validation() {
        let request = RegisterRequest {
            username: "al".into(),
            email: "alice@example.com".into(),
            password: "short".into(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("password"));
        assert!(!errors.field_errors().contains_key("email"));
    }
}
