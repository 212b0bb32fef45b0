//! Hotel Client - Application entry point
//!
//! CLI-based entry point that dispatches to the command modules.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotel_client::{
    cli::Cli,
    commands::{self, CommandContext},
    config::Config,
    services::{ServiceContainer, Services},
    utils::{ConsoleNotifier, Notifier},
    AppError, AppResult, ThemeMode,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let config = match load_config(cli.api_url.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&ConsoleNotifier::new(ThemeMode::default()), &e),
    };
    tracing::debug!(api_url = %config.api_url, "Configuration loaded");

    let services = Arc::new(Services::from_config(&config));
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::new(services.theme().theme()));
    let ctx = CommandContext::new(services, notifier.clone()).with_json(cli.json);

    // Execute command
    if let Err(e) = commands::execute(cli.command, &ctx).await {
        fail(notifier.as_ref(), &e);
    }
}

/// Environment configuration with the `--api-url` override applied
fn load_config(api_url: Option<&str>) -> AppResult<Config> {
    let config = Config::from_env();
    match api_url {
        Some(url) => config.with_api_url(url),
        None => Ok(config),
    }
}

/// Report a failure to the user and exit
fn fail(notifier: &dyn Notifier, e: &AppError) -> ! {
    tracing::error!(code = e.code(), "Command failed: {}", e);
    if e.requires_login() {
        notifier.error("Login required", Some("Run `hotel login` to start a session."));
    } else {
        notifier.error("Request failed", Some(&e.user_message()));
    }
    std::process::exit(1);
}

/// Initialize tracing subscriber, writing to stderr
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
