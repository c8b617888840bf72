//! Login command - verify and store a session token

use crate::app::Aoc;
use crate::cli::args::LoginArgs;
use crate::error::{AocError, AocResult};
use crate::puzzle::default_year;
use crate::ui::{self, TaskSpinner, UiContext};
use tracing::debug;

/// Execute the login command
pub async fn execute(args: LoginArgs, aoc: &Aoc) -> AocResult<()> {
    let ctx = UiContext::detect();
    let token = args.session.trim().to_string();
    if token.is_empty() {
        return Err(AocError::User("Session token is empty".to_string()));
    }

    let client = aoc.client_for(&token);
    let year = default_year(chrono::Utc::now());

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Checking session token...");
    let user = tokio::task::spawn_blocking(move || client.ping(year))
        .await
        .map_err(|e| AocError::Internal(format!("login task failed: {}", e)))?;

    match user {
        Ok(user) => {
            aoc.save_session(&token)?;
            spinner.stop(&format!("Logged in as {}", user));
            Ok(())
        }
        Err(e) => {
            debug!("Session check failed: {}", e);
            spinner.stop_error("Session token was not accepted");
            Err(match e {
                AocError::UnrecognizedResponse(_) => AocError::Unauthorized,
                other => other,
            })
        }
    }
}
