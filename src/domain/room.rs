//! Room entity, occupancy calendar and related types.
//!
//! Field names on the wire follow the API (`numero`, `tipo`, ...); the Rust
//! side uses English names.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RoomType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RoomType::Standard),
            "deluxe" => Ok(RoomType::Deluxe),
            "suite" => Ok(RoomType::Suite),
            other => Err(AppError::validation(format!("Unknown room type '{}'", other))),
        }
    }
}

/// Housekeeping status of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomStatus {
    #[default]
    #[serde(rename = "livre")]
    Available,
    #[serde(rename = "ocupado")]
    Occupied,
    #[serde(rename = "limpeza")]
    Cleaning,
    #[serde(rename = "manutencao")]
    Maintenance,
}

impl RoomStatus {
    /// Name used by the API
    pub fn as_api_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "livre",
            RoomStatus::Occupied => "ocupado",
            RoomStatus::Cleaning => "limpeza",
            RoomStatus::Maintenance => "manutencao",
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_api_str())
    }
}

impl FromStr for RoomStatus {
    type Err = AppError;

    /// Accepts both the API names and their English equivalents
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "livre" | "available" | "free" => Ok(RoomStatus::Available),
            "ocupado" | "occupied" => Ok(RoomStatus::Occupied),
            "limpeza" | "cleaning" => Ok(RoomStatus::Cleaning),
            "manutencao" | "maintenance" => Ok(RoomStatus::Maintenance),
            other => Err(AppError::validation(format!("Unknown room status '{}'", other))),
        }
    }
}

/// Hotel room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "tipo")]
    pub kind: RoomType,
    pub status: RoomStatus,
    #[serde(rename = "capacidade")]
    pub capacity: u32,
    #[serde(rename = "valor_diaria")]
    pub daily_rate: f64,
    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Room creation payload
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RoomCreate {
    #[serde(rename = "numero")]
    #[validate(length(min = 1, message = "Room number is required"))]
    pub number: String,
    #[serde(rename = "tipo")]
    pub kind: RoomType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
    #[serde(rename = "capacidade", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: Option<u32>,
    #[serde(rename = "valor_diaria")]
    #[validate(range(min = 0.0, message = "Daily rate cannot be negative"))]
    pub daily_rate: f64,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial room update
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct RoomUpdate {
    #[serde(rename = "numero", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Room number cannot be empty"))]
    pub number: Option<String>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
    #[serde(rename = "capacidade", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: Option<u32>,
    #[serde(rename = "valor_diaria", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Daily rate cannot be negative"))]
    pub daily_rate: Option<f64>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RoomUpdate {
    pub fn is_empty(&self) -> bool {
        self.number.is_none()
            && self.kind.is_none()
            && self.status.is_none()
            && self.capacity.is_none()
            && self.daily_rate.is_none()
            && self.description.is_none()
    }
}

/// One day of a room's occupancy calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCalendarDay {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    pub status: String,
    #[serde(rename = "reserva_id", default, skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<i64>,
    #[serde(rename = "reserva_status", default, skip_serializing_if = "Option::is_none")]
    pub reservation_status: Option<String>,
    #[serde(rename = "cliente_id", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
}

/// Occupancy of one room over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCalendar {
    #[serde(rename = "quarto_id")]
    pub room_id: i64,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    pub status: String,
    #[serde(rename = "capacidade")]
    pub capacity: u32,
    #[serde(rename = "valor_diaria")]
    pub daily_rate: f64,
    #[serde(rename = "periodo_inicio")]
    pub period_start: NaiveDate,
    #[serde(rename = "periodo_fim")]
    pub period_end: NaiveDate,
    #[serde(rename = "ocupacao")]
    pub days: Vec<RoomCalendarDay>,
}

impl RoomCalendar {
    /// Number of days in the range on which the room is booked
    pub fn booked_days(&self) -> usize {
        self.days.iter().filter(|d| d.reservation_id.is_some()).count()
    }
}
