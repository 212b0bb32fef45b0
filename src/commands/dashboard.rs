//! Dashboard command.

use super::output::{dashboard_text, emit};
use super::CommandContext;
use crate::errors::AppResult;

/// Execute the dashboard command
pub async fn execute(ctx: &CommandContext) -> AppResult<()> {
    let summary = ctx.services.dashboard().summary().await?;
    emit(ctx, &summary, dashboard_text)
}
