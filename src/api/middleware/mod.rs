//! API middleware.

mod auth;

pub use auth::{check_session, require_session, GuardDecision};
