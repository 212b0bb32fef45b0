//! Commands module - CLI command implementations.
//!
//! Each command group is implemented in its own module. Protected commands
//! pass through the session guard before they run.

pub mod clients;
pub mod dashboard;
pub mod output;
pub mod reservations;
pub mod rooms;
pub mod session;
pub mod theme;

use std::sync::Arc;

use crate::api::require_session;
use crate::cli::Commands;
use crate::errors::AppResult;
use crate::services::ServiceContainer;
use crate::utils::Notifier;

/// Everything a command needs to run
#[derive(Clone)]
pub struct CommandContext {
    pub services: Arc<dyn ServiceContainer>,
    pub notifier: Arc<dyn Notifier>,
    /// Print results as JSON instead of text
    pub json: bool,
}

impl CommandContext {
    pub fn new(services: Arc<dyn ServiceContainer>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            services,
            notifier,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Ask before a destructive action unless `yes` was given
    pub fn confirmed(&self, yes: bool, title: &str) -> bool {
        if yes || self.notifier.confirm(title, Some("This cannot be undone.")) {
            return true;
        }
        self.notifier.info("Cancelled", None);
        false
    }
}

/// Run a parsed command
pub async fn execute(command: Commands, ctx: &CommandContext) -> AppResult<()> {
    if command.is_protected() {
        require_session(ctx.services.auth().as_ref())?;
    }

    match command {
        Commands::Login(args) => session::login(args, ctx).await,
        Commands::Logout => session::logout(ctx),
        Commands::Status => session::status(ctx),
        Commands::Register(args) => session::register(args, ctx).await,
        Commands::Dashboard => dashboard::execute(ctx).await,
        Commands::Clients(args) => clients::execute(args, ctx).await,
        Commands::Rooms(args) => rooms::execute(args, ctx).await,
        Commands::Reservations(args) => reservations::execute(args, ctx).await,
        Commands::Theme(args) => theme::execute(args, ctx),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;
    use crate::services::MockServiceContainer;
    use crate::utils::Level;

    /// Notifier recording every message, answering confirmations with a fixed value
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub answer: bool,
        pub messages: Mutex<Vec<(Level, String)>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer,
                ..Default::default()
            }
        }

        pub fn titles(&self) -> Vec<String> {
            self.messages
                .lock()
                .unwrap()
                .iter()
                .map(|(_, title)| title.clone())
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, level: Level, title: &str, _text: Option<&str>) {
            self.messages.lock().unwrap().push((level, title.to_string()));
        }

        fn confirm(&self, title: &str, _text: Option<&str>) -> bool {
            self.prompts.lock().unwrap().push(title.to_string());
            self.answer
        }
    }

    pub fn context(
        services: MockServiceContainer,
        notifier: Arc<RecordingNotifier>,
    ) -> CommandContext {
        CommandContext::new(Arc::new(services), notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::cli::Cli;
    use crate::services::{MockAuthService, MockServiceContainer};
    use clap::Parser;

    #[tokio::test]
    async fn test_protected_command_requires_session() {
        let mut auth = MockAuthService::new();
        auth.expect_is_authenticated().return_const(false);
        let auth: Arc<dyn crate::services::AuthService> = Arc::new(auth);

        let mut services = MockServiceContainer::new();
        services.expect_auth().returning(move || auth.clone());
        services.expect_dashboard().never();

        let ctx = context(services, Arc::new(RecordingNotifier::default()));
        let cli = Cli::try_parse_from(["hotel", "dashboard"]).unwrap();

        let err = execute(cli.command, &ctx).await.unwrap_err();
        assert!(err.requires_login());
    }

    #[test]
    fn test_confirmation_declined() {
        let notifier = Arc::new(RecordingNotifier::answering(false));
        let ctx = context(MockServiceContainer::new(), notifier.clone());

        assert!(!ctx.confirmed(false, "Delete?"));
        assert_eq!(notifier.titles(), vec!["Cancelled".to_string()]);

        assert!(ctx.confirmed(true, "Delete?"));
        assert_eq!(notifier.prompts.lock().unwrap().len(), 1);
    }
}
