//! Session guard for protected commands.

use crate::errors::{AppError, AppResult};
use crate::services::AuthService;

/// Outcome of checking the session before a protected view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// No session at all
    LoginRequired,
    /// A session existed but its token expired; it has been ended
    SessionExpired,
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Decide whether a protected view may be entered.
///
/// An expired token ends the session before redirecting.
pub fn check_session(auth: &dyn AuthService) -> GuardDecision {
    if !auth.is_authenticated() {
        return GuardDecision::LoginRequired;
    }

    if !auth.is_token_valid() {
        tracing::info!("Session token expired, logging out");
        auth.logout();
        return GuardDecision::SessionExpired;
    }

    GuardDecision::Allow
}

/// Require a valid session, returning Unauthorized otherwise.
pub fn require_session(auth: &dyn AuthService) -> AppResult<()> {
    match check_session(auth) {
        GuardDecision::Allow => Ok(()),
        decision => {
            tracing::debug!(?decision, "Redirecting to login");
            Err(AppError::Unauthorized)
        }
    }
}
