//! Account service - sign-in, registration and sign-out.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::api::HttpGateway;
use crate::config::AUTH_REGISTER_PATH;
use crate::domain::{RegisterRequest, RegisteredUser};
use crate::errors::{AppError, AppResult};

use super::AuthService;

#[cfg(test)]
use mockall::automock;

/// Account service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Exchange credentials for a token and start a session
    async fn sign_in(&self, username: &str, password: &str) -> AppResult<()>;

    /// Create a new account. Does not sign in.
    async fn register(&self, request: RegisterRequest) -> AppResult<RegisteredUser>;

    /// End the current session
    fn sign_out(&self);
}

pub struct AccountManager {
    gateway: Arc<HttpGateway>,
    auth: Arc<dyn AuthService>,
}

impl AccountManager {
    pub fn new(gateway: Arc<HttpGateway>, auth: Arc<dyn AuthService>) -> Self {
        Self { gateway, auth }
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn sign_in(&self, username: &str, password: &str) -> AppResult<()> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("Username and password are required"));
        }

        let token = self.gateway.login_request(username, password).await?;
        self.auth.login(&token.access_token)?;
        tracing::info!(username, "Signed in");
        Ok(())
    }

    async fn register(&self, request: RegisterRequest) -> AppResult<RegisteredUser> {
        request.validate()?;
        let user: RegisteredUser = self
            .gateway
            .post(AUTH_REGISTER_PATH, Some(&request))
            .await?;
        tracing::info!(user_id = user.id, username = %user.username, "Account registered");
        Ok(user)
    }

    fn sign_out(&self) {
        self.auth.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockAuthService;

    // No expectations on the mock: any session call fails the test
    fn manager(auth: MockAuthService) -> AccountManager {
        let auth: Arc<dyn AuthService> = Arc::new(auth);
        let gateway = Arc::new(HttpGateway::new("http://127.0.0.1:1", auth.clone()));
        AccountManager::new(gateway, auth)
    }

    #[test]
    fn test_sign_in_rejects_blank_credentials() {
        let accounts = manager(MockAuthService::new());

        for (user, pass) in [("", "pw"), ("   ", "pw"), ("alice", "")] {
            let err = tokio_test::block_on(accounts.sign_in(user, pass)).unwrap_err();
            assert_eq!(err.code(), "VALIDATION_ERROR");
        }
    }

    #[test]
    fn test_register_validates_before_sending() {
        let accounts = manager(MockAuthService::new());
        let request = RegisterRequest {
            username: "al".into(),
            email: "alice@example.com".into(),
            password: "correct-horse".into(),
        };

        let err = tokio_test::block_on(accounts.register(request)).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_sign_out_ends_session() {
        let mut auth = MockAuthService::new();
        auth.expect_logout().times(1).return_const(());

        manager(auth).sign_out();
    }
}
