//! Hotel Client - client library and CLI for the hotel management API
//!
//! Holds the session (bearer token with client-side expiry inspection),
//! talks to the API through an authenticated gateway and exposes typed
//! services for clients, rooms, reservations and the dashboard.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities exchanged with the API, session token, theme
//! - **services**: Session state and API use cases
//! - **infra**: Durable client-side storage
//! - **api**: HTTP gateway and session guard
//! - **types**: Shared types (pagination, timestamps)
//! - **utils**: Notifications
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Sign in (token is stored for later runs)
//! hotel login -u alice -p secret
//!
//! # List rooms as JSON
//! hotel --json rooms list
//!
//! # Book a room
//! hotel reservations create --room 1 --client 7 --check-in 2025-06-10 --check-out 2025-06-12
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::HttpGateway;
pub use config::Config;
pub use domain::{ExpiryCheck, SessionToken, ThemeMode};
pub use errors::{AppError, AppResult};
pub use services::{ServiceContainer, Services};
