//! Hotel client (guest) entity and related types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Guest registered with the hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(with = "crate::types::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, with = "crate::types::timestamp::option")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Client creation payload
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ClientCreate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Document is required"))]
    pub document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Partial client update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Phone cannot be empty"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Document cannot be empty"))]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ClientUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.document.is_none()
            && self.address.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let client: Client = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Ana Souza",
                "email": "ana@example.com",
                "phone": "+55 11 99999-0000",
                "document": "123.456.789-00",
                "address": null,
                "created_at": "2025-03-01T09:30:00",
                "updated_at": null
            }"#,
        )
        .unwrap();

        assert_eq!(client.id, 7);
        assert!(client.address.is_none());
        assert!(client.updated_at.is_none());
    }

    #[test]
    fn test_create_validation() {
        let mut payload = ClientCreate {
            name: "Ana".into(),
            email: "not-an-email".into(),
            phone: "123".into(),
            document: "".into(),
            address: None,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("document"));

        payload.email = "ana@example.com".into();
        payload.document = "42".into();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = ClientUpdate {
            phone: Some("555".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"phone":"555"}"#);
        assert!(ClientUpdate::default().is_empty());
    }
}
