//! Token store - single source of truth for the session token.
//!
//! One store is shared by every component of a client context. It starts
//! `Uninitialized` and is hydrated from durable storage at most once; any
//! write (login or logout) also counts as initialization.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::TOKEN_STORAGE_KEY;
use crate::domain::SessionToken;
use crate::infra::KeyValueStore;

/// In-memory token state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenState {
    /// Durable storage has not been read yet
    Uninitialized,
    Empty,
    Present(SessionToken),
}

impl TokenState {
    fn token(&self) -> Option<&SessionToken> {
        match self {
            TokenState::Present(token) => Some(token),
            _ => None,
        }
    }
}

pub struct TokenStore {
    state: Mutex<TokenState>,
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, TOKEN_STORAGE_KEY)
    }

    /// Store persisting under a custom storage key
    pub fn with_key(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(TokenState::Uninitialized),
            storage,
            key: key.into(),
        }
    }

    // A poisoned lock still holds a coherent state; every write is a single assignment
    fn lock(&self) -> MutexGuard<'_, TokenState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current token, without hydrating
    pub fn get(&self) -> Option<SessionToken> {
        self.lock().token().cloned()
    }

    /// Snapshot of the state machine
    pub fn state(&self) -> TokenState {
        self.lock().clone()
    }

    pub fn is_initialized(&self) -> bool {
        !matches!(*self.lock(), TokenState::Uninitialized)
    }

    /// Replace the token and mirror it to durable storage
    pub fn set(&self, token: SessionToken) {
        let mut state = self.lock();
        if let Err(e) = self.storage.set(&self.key, token.as_str()) {
            tracing::warn!(error = %e, "Failed to persist session token");
        }
        *state = TokenState::Present(token);
        tracing::debug!("Token store -> Present");
    }

    /// Drop the token from memory and durable storage
    pub fn clear(&self) {
        let mut state = self.lock();
        self.remove_durable();
        *state = TokenState::Empty;
        tracing::debug!("Token store -> Empty");
    }

    /// Hydrate from durable storage on first call; later calls do nothing.
    ///
    /// A stored token rejected by `is_valid` is removed from storage. The
    /// lock is held throughout, so no caller can observe a half-hydrated store.
    pub fn ensure_initialized<F>(&self, is_valid: F)
    where
        F: FnOnce(&SessionToken) -> bool,
    {
        let mut state = self.lock();
        if !matches!(*state, TokenState::Uninitialized) {
            return;
        }

        *state = match self.storage.get(&self.key).map(SessionToken::new) {
            Some(token) if !token.is_empty() && is_valid(&token) => {
                tracing::debug!("Restored session token from storage");
                TokenState::Present(token)
            }
            Some(_) => {
                tracing::info!("Discarding stored session token that is no longer valid");
                self.remove_durable();
                TokenState::Empty
            }
            None => TokenState::Empty,
        };
    }

    fn remove_durable(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::warn!(error = %e, "Failed to remove stored session token");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::{MemoryStorage, MockKeyValueStore};
    use mockall::predicate::eq;

    #[test]
    fn test_starts_uninitialized() {
        let store = TokenStore::new(Arc::new(MemoryStorage::with_entries([("auth_token", "t")])));
        assert_eq!(store.state(), TokenState::Uninitialized);
        // get never hydrates
        assert_eq!(store.get(), None);
        assert!(!store.is_initialized());
    }

    #[test]
    fn test_hydrates_valid_token_once() {
        let storage = Arc::new(MemoryStorage::with_entries([("auth_token", "stored")]));
        let store = TokenStore::new(storage.clone());

        store.ensure_initialized(|_| true);
        assert_eq!(store.get(), Some(SessionToken::from("stored")));

        storage.set("auth_token", "changed elsewhere").unwrap();
        store.ensure_initialized(|_| true);
        assert_eq!(store.get(), Some(SessionToken::from("stored")));
    }

    #[test]
    fn test_invalid_stored_token_is_removed() {
        let mut storage = MockKeyValueStore::new();
        storage
            .expect_get()
            .with(eq("auth_token"))
            .times(1)
            .returning(|_| Some("expired".to_string()));
        storage
            .expect_remove()
            .with(eq("auth_token"))
            .times(1)
            .returning(|_| Ok(()));

        let store = TokenStore::new(Arc::new(storage));
        store.ensure_initialized(|_| false);
        store.ensure_initialized(|_| false);

        assert_eq!(store.state(), TokenState::Empty);
    }

    #[test]
    fn test_empty_storage_lands_in_empty() {
        let store = TokenStore::new(Arc::new(MemoryStorage::new()));
        store.ensure_initialized(|_| panic!("validator must not run without a token"));
        assert_eq!(store.state(), TokenState::Empty);
    }

    #[test]
    fn test_set_skips_hydration() {
        let storage = Arc::new(MemoryStorage::with_entries([("auth_token", "old")]));
        let store = TokenStore::new(storage.clone());

        store.set(SessionToken::from("new"));
        store.ensure_initialized(|_| true);

        assert_eq!(store.get(), Some(SessionToken::from("new")));
        assert_eq!(storage.get("auth_token"), Some("new".to_string()));
    }

    #[test]
    fn test_clear_removes_durable_copy() {
        let storage = Arc::new(MemoryStorage::new());
        let store = TokenStore::new(storage.clone());

        store.set(SessionToken::from("t"));
        store.clear();

        assert_eq!(store.state(), TokenState::Empty);
        assert_eq!(storage.get("auth_token"), None);
    }

    #[test]
    fn test_storage_failures_do_not_block_memory_state() {
        let mut storage = MockKeyValueStore::new();
        storage
            .expect_set()
            .returning(|_, _| Err(AppError::storage("disk full")));
        storage
            .expect_remove()
            .returning(|_| Err(AppError::storage("disk full")));

        let store = TokenStore::new(Arc::new(storage));
        store.set(SessionToken::from("t"));
        assert_eq!(store.get(), Some(SessionToken::from("t")));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_custom_key() {
        let storage = Arc::new(MemoryStorage::new());
        let store = TokenStore::with_key(storage.clone(), "token");
        store.set(SessionToken::from("t"));
        assert_eq!(storage.get("token"), Some("t".to_string()));
        assert_eq!(storage.get("auth_token"), None);
    }
}
