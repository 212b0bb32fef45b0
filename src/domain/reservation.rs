//! Reservation entity and related types.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{Client, Room};
use crate::types::PageParams;

/// Booking of a room by a client for a stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    #[serde(rename = "data_checkin")]
    pub check_in: NaiveDate,
    #[serde(rename = "data_checkout")]
    pub check_out: NaiveDate,
    #[serde(rename = "quarto_id")]
    pub room_id: i64,
    pub client_id: i64,
    #[serde(rename = "valor_total")]
    pub total: f64,
    pub status: String,
    #[serde(rename = "quarto", default, skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<Client>,
    #[serde(with = "crate::types::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, with = "crate::types::timestamp::option")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Reservation {
    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Reservation creation payload
#[derive(Debug, Clone, Serialize, Validate)]
#[validate(schema(function = "validate_new_stay"))]
pub struct ReservationCreate {
    #[serde(rename = "quarto_id")]
    #[validate(range(min = 1, message = "Room id must be positive"))]
    pub room_id: i64,
    #[validate(range(min = 1, message = "Client id must be positive"))]
    pub client_id: i64,
    #[serde(rename = "data_checkin")]
    pub check_in: NaiveDate,
    #[serde(rename = "data_checkout")]
    pub check_out: NaiveDate,
}

/// Partial reservation update
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[validate(schema(function = "validate_changed_stay"))]
pub struct ReservationUpdate {
    #[serde(rename = "data_checkin", skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(rename = "data_checkout", skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Status cannot be empty"))]
    pub status: Option<String>,
}

impl ReservationUpdate {
    pub fn is_empty(&self) -> bool {
        self.check_in.is_none() && self.check_out.is_none() && self.status.is_none()
    }
}

fn stay_error() -> ValidationError {
    let mut error = ValidationError::new("stay");
    error.message = Some(Cow::from("Check-out must be after check-in"));
    error
}

fn validate_new_stay(payload: &ReservationCreate) -> Result<(), ValidationError> {
    if payload.check_out <= payload.check_in {
        return Err(stay_error());
    }
    Ok(())
}

fn validate_changed_stay(payload: &ReservationUpdate) -> Result<(), ValidationError> {
    match (payload.check_in, payload.check_out) {
        (Some(check_in), Some(check_out)) if check_out <= check_in => Err(stay_error()),
        _ => Ok(()),
    }
}

/// Filters accepted by the reservation list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    pub page: PageParams,
    pub status: Option<String>,
    /// Month of check-in, `YYYY-MM`
    pub month: Option<String>,
}

impl ReservationFilter {
    /// Query pairs; `status` and `mes` are only sent when set
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = self.page.to_query();
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            query.push(("status".to_string(), status.to_string()));
        }
        if let Some(month) = self.month.as_deref().filter(|m| !m.is_empty()) {
            query.push(("mes".to_string(), month.to_string()));
        }
        query
    }
}
