//! Service Container - one client context per process.
//!
//! Owns the shared token store and hands every service the same session,
//! so a logout triggered by the gateway is seen by all of them.

use std::sync::Arc;

use super::{
    AccountManager, AccountService, AuthService, ClientManager, ClientService, DashboardManager,
    DashboardService, ReservationManager, ReservationService, RoomManager, RoomService,
    SessionAuth, ThemeService, TokenStore,
};
use crate::api::HttpGateway;
use crate::config::Config;
use crate::domain::ExpiryCheck;
use crate::infra::{storage, KeyValueStore};

#[cfg(test)]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(test, automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn accounts(&self) -> Arc<dyn AccountService>;

    fn clients(&self) -> Arc<dyn ClientService>;

    fn rooms(&self) -> Arc<dyn RoomService>;

    fn reservations(&self) -> Arc<dyn ReservationService>;

    fn dashboard(&self) -> Arc<dyn DashboardService>;

    fn theme(&self) -> Arc<ThemeService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    account_service: Arc<dyn AccountService>,
    client_service: Arc<dyn ClientService>,
    room_service: Arc<dyn RoomService>,
    reservation_service: Arc<dyn ReservationService>,
    dashboard_service: Arc<dyn DashboardService>,
    theme_service: Arc<ThemeService>,
}

impl Services {
    /// Build the client context for a configuration
    pub fn from_config(config: &Config) -> Self {
        let storage = storage::open(config);
        let prefers_dark = ThemeService::system_preference(config);
        Self::with_storage(config, storage, prefers_dark)
    }

    /// Build the client context over an explicit storage backend
    pub fn with_storage(
        config: &Config,
        storage: Arc<dyn KeyValueStore>,
        system_prefers_dark: bool,
    ) -> Self {
        let store = Arc::new(TokenStore::new(storage.clone()));
        let auth_service: Arc<dyn AuthService> = Arc::new(SessionAuth::new(
            store,
            ExpiryCheck::from_flag(config.client_expiry_check),
        ));
        let gateway = Arc::new(HttpGateway::new(config.api_url.clone(), auth_service.clone()));

        Self {
            account_service: Arc::new(AccountManager::new(gateway.clone(), auth_service.clone())),
            client_service: Arc::new(ClientManager::new(gateway.clone())),
            room_service: Arc::new(RoomManager::new(gateway.clone())),
            reservation_service: Arc::new(ReservationManager::new(gateway.clone())),
            dashboard_service: Arc::new(DashboardManager::new(gateway)),
            theme_service: Arc::new(ThemeService::new(storage, system_prefers_dark)),
            auth_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn accounts(&self) -> Arc<dyn AccountService> {
        self.account_service.clone()
    }

    fn clients(&self) -> Arc<dyn ClientService> {
        self.client_service.clone()
    }

    fn rooms(&self) -> Arc<dyn RoomService> {
        self.room_service.clone()
    }

    fn reservations(&self) -> Arc<dyn ReservationService> {
        self.reservation_service.clone()
    }

    fn dashboard(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }

    fn theme(&self) -> Arc<ThemeService> {
        self.theme_service.clone()
    }
}
