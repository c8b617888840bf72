//! Confirmation prompt with CI fallback

use super::context::UiContext;
use crate::error::{AocError, AocResult};

/// Ask a yes/no question
///
/// `--yes` approves without asking; without a terminal the default is used.
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> AocResult<bool> {
    if ctx.auto_yes() {
        println!("{} (auto-approved)", message);
        return Ok(true);
    }
    if !ctx.is_interactive() {
        return Ok(default);
    }

    // cliclack blocks on stdin
    let message = message.to_string();
    tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| AocError::Internal(format!("prompt task failed: {}", e)))?
    .map_err(|e| AocError::io("reading confirmation", e))
}
