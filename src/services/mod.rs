//! Application services layer - session state and API use cases.
//!
//! Services depend on abstractions (traits) for dependency inversion;
//! the [`ServiceContainer`] wires one shared session into all of them.

mod account_service;
mod auth_service;
mod client_service;
pub mod container;
mod dashboard_service;
mod reservation_service;
mod room_service;
mod theme_service;
mod token_store;

// Service Container
pub use container::{ServiceContainer, Services};

// Session
pub use auth_service::{AuthService, SessionAuth};
pub use theme_service::ThemeService;
pub use token_store::{TokenState, TokenStore};

// Service traits and implementations
pub use account_service::{AccountManager, AccountService};
pub use client_service::{ClientManager, ClientService};
pub use dashboard_service::{DashboardManager, DashboardService};
pub use reservation_service::{ReservationManager, ReservationService};
pub use room_service::{RoomManager, RoomService};

#[cfg(test)]
pub use account_service::MockAccountService;
#[cfg(test)]
pub use auth_service::MockAuthService;
#[cfg(test)]
pub use client_service::MockClientService;
#[cfg(test)]
pub use container::MockServiceContainer;
#[cfg(test)]
pub use dashboard_service::MockDashboardService;
#[cfg(test)]
pub use reservation_service::MockReservationService;
#[cfg(test)]
pub use room_service::MockRoomService;
