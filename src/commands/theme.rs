//! Theme command - light/dark output.

use serde::Serialize;

use super::output::emit;
use super::CommandContext;
use crate::cli::args::{ThemeAction, ThemeArgs};
use crate::domain::ThemeMode;
use crate::errors::AppResult;

#[derive(Debug, Serialize)]
struct ThemeView {
    theme: ThemeMode,
    marker: Option<&'static str>,
}

/// Execute the theme command
pub fn execute(args: ThemeArgs, ctx: &CommandContext) -> AppResult<()> {
    let theme = ctx.services.theme();

    match args.action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            theme.toggle();
        }
        ThemeAction::Set { mode } => theme.set(mode),
    }

    let view = ThemeView {
        theme: theme.theme(),
        marker: theme.marker(),
    };
    emit(ctx, &view, |v| format!("Theme: {}", v.theme))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::commands::testing::{context, RecordingNotifier};
    use crate::infra::{KeyValueStore, MemoryStorage};
    use crate::services::{MockServiceContainer, ThemeService};

    #[test]
    fn test_toggle_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let theme = Arc::new(ThemeService::new(storage.clone(), false));

        let mut services = MockServiceContainer::new();
        let shared = theme.clone();
        services.expect_theme().returning(move || shared.clone());

        let ctx = context(services, Arc::new(RecordingNotifier::default()));
        execute(
            ThemeArgs {
                action: Some(ThemeAction::Toggle),
            },
            &ctx,
        )
        .unwrap();

        assert!(theme.is_dark());
        assert_eq!(storage.get("theme_mode"), Some("dark".to_string()));
    }
}
