//! Reservation service - bookings.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::api::HttpGateway;
use crate::config::RESERVATIONS_PATH;
use crate::domain::{Reservation, ReservationCreate, ReservationFilter, ReservationUpdate};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Reservation service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReservationService: Send + Sync {
    async fn list(&self, filter: ReservationFilter) -> AppResult<Vec<Reservation>>;

    async fn get(&self, id: i64) -> AppResult<Reservation>;

    async fn create(&self, payload: ReservationCreate) -> AppResult<Reservation>;

    async fn update(&self, id: i64, payload: ReservationUpdate) -> AppResult<Reservation>;

    /// Delete a reservation, returning it as it was
    async fn delete(&self, id: i64) -> AppResult<Reservation>;
}

pub struct ReservationManager {
    gateway: Arc<HttpGateway>,
}

impl ReservationManager {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }
}

fn reservation_path(id: i64) -> String {
    format!("{}{}", RESERVATIONS_PATH, id)
}

/// `mes` must look like `YYYY-MM`
fn validate_month(month: &str) -> AppResult<()> {
    let valid = month
        .split_once('-')
        .filter(|(year, _)| year.len() == 4)
        .and_then(|(year, month)| Some((year.parse::<i32>().ok()?, month.parse::<u32>().ok()?)))
        .map(|(_, month)| (1..=12).contains(&month))
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Invalid month '{}', expected YYYY-MM",
            month
        )))
    }
}

#[async_trait]
impl ReservationService for ReservationManager {
    async fn list(&self, filter: ReservationFilter) -> AppResult<Vec<Reservation>> {
        if let Some(month) = filter.month.as_deref().filter(|m| !m.is_empty()) {
            validate_month(month)?;
        }
        self.gateway
            .get_with_query(RESERVATIONS_PATH, filter.to_query())
            .await
    }

    async fn get(&self, id: i64) -> AppResult<Reservation> {
        self.gateway.get(&reservation_path(id)).await
    }

    async fn create(&self, payload: ReservationCreate) -> AppResult<Reservation> {
        payload.validate()?;
        let reservation: Reservation = self.gateway.post(RESERVATIONS_PATH, Some(&payload)).await?;
        tracing::info!(reservation_id = reservation.id, "Reservation created");
        Ok(reservation)
    }

    async fn update(&self, id: i64, payload: ReservationUpdate) -> AppResult<Reservation> {
        if payload.is_empty() {
            return Err(AppError::validation("Nothing to update"));
        }
        payload.validate()?;
        self.gateway.put(&reservation_path(id), Some(&payload)).await
    }

    async fn delete(&self, id: i64) -> AppResult<Reservation> {
        let reservation: Reservation = self.gateway.delete(&reservation_path(id)).await?;
        tracing::info!(reservation_id = id, "Reservation deleted");
        Ok(reservation)
    }
}
