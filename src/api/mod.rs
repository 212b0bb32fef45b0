//! API layer - HTTP access to the hotel backend
//!
//! - Gateway (authenticated JSON requests, token submission)
//! - Middleware (session guard for protected commands)

pub mod gateway;
pub mod middleware;

pub use gateway::{HttpGateway, RequestOptions};
pub use middleware::{check_session, require_session, GuardDecision};
