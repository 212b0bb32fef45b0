//! Room service - rooms and their occupancy calendar.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::IgnoredAny;
use std::sync::Arc;
use validator::Validate;

use crate::api::HttpGateway;
use crate::config::{ROOMS_CALENDAR_PATH, ROOMS_PATH};
use crate::domain::{Room, RoomCalendar, RoomCreate, RoomUpdate};
use crate::errors::{AppError, AppResult};
use crate::types::PageParams;

#[cfg(test)]
use mockall::automock;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Room service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoomService: Send + Sync {
    async fn list(&self, page: PageParams) -> AppResult<Vec<Room>>;

    async fn get(&self, id: i64) -> AppResult<Room>;

    async fn create(&self, payload: RoomCreate) -> AppResult<Room>;

    async fn update(&self, id: i64, payload: RoomUpdate) -> AppResult<Room>;

    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Day-by-day occupancy of every room between two dates, inclusive
    async fn calendar(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<RoomCalendar>>;
}

pub struct RoomManager {
    gateway: Arc<HttpGateway>,
}

impl RoomManager {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }
}

fn room_path(id: i64) -> String {
    format!("{}{}", ROOMS_PATH, id)
}

#[async_trait]
impl RoomService for RoomManager {
    async fn list(&self, page: PageParams) -> AppResult<Vec<Room>> {
        self.gateway.get_with_query(ROOMS_PATH, page.to_query()).await
    }

    async fn get(&self, id: i64) -> AppResult<Room> {
        self.gateway.get(&room_path(id)).await
    }

    async fn create(&self, payload: RoomCreate) -> AppResult<Room> {
        payload.validate()?;
        self.gateway.post(ROOMS_PATH, Some(&payload)).await
    }

    async fn update(&self, id: i64, payload: RoomUpdate) -> AppResult<Room> {
        if payload.is_empty() {
            return Err(AppError::validation("Nothing to update"));
        }
        payload.validate()?;
        self.gateway.put(&room_path(id), Some(&payload)).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let _: IgnoredAny = self.gateway.delete(&room_path(id)).await?;
        tracing::info!(room_id = id, "Room deleted");
        Ok(())
    }

    async fn calendar(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<RoomCalendar>> {
        if end < start {
            return Err(AppError::validation("End date must not be before start date"));
        }

        let query = vec![
            ("data_inicio".to_string(), start.format(DATE_FORMAT).to_string()),
            ("data_fim".to_string(), end.format(DATE_FORMAT).to_string()),
        ];
        self.gateway.get_with_query(ROOMS_CALENDAR_PATH, query).await
    }
}
