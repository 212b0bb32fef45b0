//! Session commands - login, logout, status and registration.

use serde::Serialize;

use super::output::emit;
use super::CommandContext;
use crate::cli::args::{LoginArgs, RegisterArgs};
use crate::domain::RegisterRequest;
use crate::errors::AppResult;

/// Execute the login command
pub async fn login(args: LoginArgs, ctx: &CommandContext) -> AppResult<()> {
    ctx.services
        .accounts()
        .sign_in(&args.username, &args.password)
        .await?;
    ctx.notifier
        .success("Logged in", Some(&format!("Welcome, {}", args.username)));
    Ok(())
}

/// Execute the logout command
pub fn logout(ctx: &CommandContext) -> AppResult<()> {
    ctx.services.accounts().sign_out();
    ctx.notifier.success("Logged out", None);
    Ok(())
}

#[derive(Debug, Serialize)]
struct SessionStatus {
    authenticated: bool,
    valid: bool,
}

/// Execute the status command
pub fn status(ctx: &CommandContext) -> AppResult<()> {
    let auth = ctx.services.auth();
    let status = SessionStatus {
        authenticated: auth.is_authenticated(),
        valid: auth.is_token_valid(),
    };

    emit(ctx, &status, |s| match (s.authenticated, s.valid) {
        (true, true) => "Logged in".to_string(),
        (true, false) => "Session expired, run `hotel login`".to_string(),
        _ => "Not logged in".to_string(),
    })
}

/// Execute the register command
pub async fn register(args: RegisterArgs, ctx: &CommandContext) -> AppResult<()> {
    let user = ctx
        .services
        .accounts()
        .register(RegisterRequest {
            username: args.username,
            email: args.email,
            password: args.password,
        })
        .await?;

    ctx.notifier.success(
        "Account created",
        Some(&format!("{} (#{}), run `hotel login` to sign in", user.username, user.id)),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::commands::testing::{context, RecordingNotifier};
    use crate::services::{AccountService, MockAccountService, MockServiceContainer};

    #[tokio::test]
    async fn test_login_signs_in_and_notifies() {
        let mut accounts = MockAccountService::new();
        accounts
            .expect_sign_in()
            .withf(|username, password| username == "alice" && password == "pw")
            .times(1)
            .returning(|_, _| Ok(()));
        let accounts: Arc<dyn AccountService> = Arc::new(accounts);

        let mut services = MockServiceContainer::new();
        services.expect_accounts().returning(move || accounts.clone());

        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context(services, notifier.clone());

        login(
            LoginArgs {
                username: "alice".into(),
                password: "pw".into(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(notifier.titles(), vec!["Logged in".to_string()]);
    }

    #[test]
    fn test_logout_signs_out() {
        let mut accounts = MockAccountService::new();
        accounts.expect_sign_out().times(1).return_const(());
        let accounts: Arc<dyn AccountService> = Arc::new(accounts);

        let mut services = MockServiceContainer::new();
        services.expect_accounts().returning(move || accounts.clone());

        let ctx = context(services, Arc::new(RecordingNotifier::default()));
        logout(&ctx).unwrap();
    }
}
