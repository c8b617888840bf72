//! Submit command - send the last run's result to the server

use crate::app::Aoc;
use crate::cli::args::SubmitArgs;
use crate::error::{AocError, AocResult};
use crate::remote::SubmitOutcome;
use crate::ui::{self, TaskSpinner, UiContext};

/// Execute the submit command
pub async fn execute(args: SubmitArgs, aoc: &Aoc) -> AocResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);
    let (puzzle, res) = aoc.last_result()?;
    let client = aoc.client()?;

    let question = format!("Submit answer {:?} for {}?", res, puzzle.label());
    if !ui::confirm(&ctx, &question, false).await? {
        ui::step_info(&ctx, "Nothing submitted");
        return Ok(());
    }

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Submitting...");
    let (year, day, part) = (puzzle.year, puzzle.day, puzzle.part);
    let answer = res.clone();
    let outcome = tokio::task::spawn_blocking(move || client.submit(year, day, part, &answer))
        .await
        .map_err(|e| AocError::Internal(format!("submit task failed: {}", e)))?;
    spinner.clear();

    match outcome? {
        SubmitOutcome::Correct => {
            ui::step_ok(&ctx, "Correct answer!");
            aoc.mark_correct(&puzzle)?;
            ui::remark(
                &ctx,
                &format!("Locked {} so later runs must reproduce {}", puzzle.label(), res),
            );
        }
        SubmitOutcome::TooHigh => ui::step_error(&ctx, "Incorrect! Answer is too high."),
        SubmitOutcome::TooLow => ui::step_error(&ctx, "Incorrect! Answer is too low."),
        SubmitOutcome::AlreadySolved => ui::step_warn(
            &ctx,
            "This puzzle has already been solved. Did you submit the wrong part?",
        ),
        SubmitOutcome::TooRecent(message) => ui::step_warn(&ctx, &message),
        SubmitOutcome::Unrecognized(message) => {
            return Err(AocError::UnrecognizedResponse(message));
        }
    }
    Ok(())
}
