//! Authentication service - session state as seen by the rest of the client.
//!
//! Wraps the [`TokenStore`] with the login/logout lifecycle and the
//! client-side validity check. Every state-reading operation hydrates the
//! store first, so callers never have to.

use std::sync::Arc;

use crate::domain::{ExpiryCheck, SessionToken};
use crate::errors::{AppError, AppResult};

use super::token_store::TokenStore;

#[cfg(test)]
use mockall::automock;

/// Authentication service trait for dependency injection.
#[cfg_attr(test, automock)]
pub trait AuthService: Send + Sync {
    /// Start a session with a token issued by the API
    fn login(&self, token: &str) -> AppResult<()>;

    /// End the session. Idempotent.
    fn logout(&self);

    /// Whether a non-empty token is held
    fn is_authenticated(&self) -> bool;

    /// `Authorization` header value for the current token. Expiry is not checked.
    fn auth_header(&self) -> Option<String>;

    /// Whether the current token is present and not expired
    fn is_token_valid(&self) -> bool;

    /// Hydrate the session from durable storage if not done yet
    fn ensure_initialized(&self);
}

/// Token-store backed implementation of [`AuthService`]
pub struct SessionAuth {
    store: Arc<TokenStore>,
    expiry_check: ExpiryCheck,
}

impl SessionAuth {
    pub fn new(store: Arc<TokenStore>, expiry_check: ExpiryCheck) -> Self {
        Self {
            store,
            expiry_check,
        }
    }

    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    fn current(&self) -> Option<SessionToken> {
        self.ensure_initialized();
        self.store.get().filter(|token| !token.is_empty())
    }
}

impl AuthService for SessionAuth {
    fn login(&self, token: &str) -> AppResult<()> {
        if token.is_empty() {
            return Err(AppError::validation("Cannot start a session with an empty token"));
        }
        self.store.set(SessionToken::new(token));
        tracing::info!("Session started");
        Ok(())
    }

    fn logout(&self) {
        self.store.clear();
        tracing::info!("Session ended");
    }

    fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    fn auth_header(&self) -> Option<String> {
        self.current().map(|token| token.bearer())
    }

    fn is_token_valid(&self) -> bool {
        self.current()
            .map(|token| token.is_valid(self.expiry_check))
            .unwrap_or(false)
    }

    fn ensure_initialized(&self) {
        let check = self.expiry_check;
        self.store.ensure_initialized(|token| token.is_valid(check));
    }
}
