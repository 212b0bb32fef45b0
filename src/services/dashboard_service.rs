//! Dashboard service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::HttpGateway;
use crate::config::DASHBOARD_PATH;
use crate::domain::DashboardSummary;
use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Headline counters and the recent activity feed
    async fn summary(&self) -> AppResult<DashboardSummary>;
}

pub struct DashboardManager {
    gateway: Arc<HttpGateway>,
}

impl DashboardManager {
    pub fn new(gateway: Arc<HttpGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl DashboardService for DashboardManager {
    async fn summary(&self) -> AppResult<DashboardSummary> {
        self.gateway.get(DASHBOARD_PATH).await
    }
}
