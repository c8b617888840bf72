//! Check command - re-run every locked puzzle

use crate::app::Aoc;
use crate::check;
use crate::cli::args::CheckArgs;
use crate::error::{AocError, AocResult};
use crate::ui::{self, UiContext};

/// Execute the check command
///
/// `--jobs` is applied to the config before `aoc` is built.
pub async fn execute(_args: CheckArgs, aoc: &Aoc) -> AocResult<()> {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "aoc check");
    let mut surface = check::for_context(&ctx);

    let summary = aoc.check(surface.as_mut()).await?;
    let total = summary.total();

    if total == 0 {
        ui::step_info(&ctx, "No locked puzzles to check");
        ui::remark(&ctx, "Run: aoc lock -d DAY -p PART");
        return Ok(());
    }

    if summary.is_success() {
        ui::outro_success(&ctx, &format!("{} locked puzzles verified", total));
        return Ok(());
    }

    let failed = summary.failed() + summary.errored();
    ui::outro_error(
        &ctx,
        &format!(
            "{} passed, {} failed, {} errored",
            summary.passed(),
            summary.failed(),
            summary.errored()
        ),
    );
    Err(AocError::CheckFailed { failed, total })
}
