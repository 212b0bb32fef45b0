//! Client service - guest records.

use async_trait::async_trait;
use serde::de::IgnoredAny;
use std::sync::Arc;
use validator::Validate;

use crate::api::HttpGateway;
use crate::config::{CLIENTS_PATH, CLIENTS_SEARCH_PATH};
use crate::domain::{Client, ClientCreate, ClientUpdate};
use crate::errors::{AppError, AppResult};
use crate::types::PageParams;

#[cfg(test)]
use mockall::automock;

/// Client service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClientService: Send + Sync {
    async fn list(&self, page: PageParams) -> AppResult<Vec<Client>>;

    async fn get(&self, id: i64) -> AppResult<Client>;

    async fn create(&self, payload: ClientCreate) -> AppResult<Client>;

    /// Apply a partial update; at least one field must be set
    async fn update(&self, id: i64, payload: ClientUpdate) -> AppResult<Client>;

    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Free-text search over the API's indexed client fields
    async fn search(&self, query: &str, page: PageParams) -> AppResult<Vec<Client>>;
}

pub struct ClientManager {
    gateway: Arc<HttpGateway>,
}

impl ClientManager {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }
}

fn client_path(id: i64) -> String {
    format!("{}{}", CLIENTS_PATH, id)
}

#[async_trait]
impl ClientService for ClientManager {
    async fn list(&self, page: PageParams) -> AppResult<Vec<Client>> {
        self.gateway
            .get_with_query(CLIENTS_PATH, page.to_query())
            .await
    }

    async fn get(&self, id: i64) -> AppResult<Client> {
        self.gateway.get(&client_path(id)).await
    }

    async fn create(&self, payload: ClientCreate) -> AppResult<Client> {
        payload.validate()?;
        self.gateway.post(CLIENTS_PATH, Some(&payload)).await
    }

    async fn update(&self, id: i64, payload: ClientUpdate) -> AppResult<Client> {
        if payload.is_empty() {
            return Err(AppError::validation("Nothing to update"));
        }
        payload.validate()?;
        self.gateway.put(&client_path(id), Some(&payload)).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let _: IgnoredAny = self.gateway.delete(&client_path(id)).await?;
        tracing::info!(client_id = id, "Client deleted");
        Ok(())
    }

    async fn search(&self, query: &str, page: PageParams) -> AppResult<Vec<Client>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::validation("Search query cannot be empty"));
        }

        let mut params = vec![("q".to_string(), query.to_string())];
        params.extend(page.to_query());
        self.gateway.get_with_query(CLIENTS_SEARCH_PATH, params).await
    }
}
