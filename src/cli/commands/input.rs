//! Input command - download puzzle input into the workspace

use crate::app::Aoc;
use crate::cli::args::InputArgs;
use crate::error::{AocError, AocResult};
use crate::ui::{self, TaskSpinner, UiContext};
use std::path::PathBuf;

const INPUT_FILE: &str = "input.txt";
const EXAMPLE_FILE: &str = "test.txt";

/// Execute the input command
pub async fn execute(args: InputArgs, aoc: &Aoc) -> AocResult<()> {
    let ctx = UiContext::detect();
    let year = args.year();
    let day = args.day;
    let client = aoc.client()?;

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start(&format!("Fetching input for {}/day{}...", year, day));

    let fetch = client.clone();
    let input = tokio::task::spawn_blocking(move || fetch.input(year, day))
        .await
        .map_err(|e| AocError::Internal(format!("download task failed: {}", e)))?;
    let input = match input {
        Ok(input) => input,
        Err(e) => {
            spinner.stop_error("Download failed");
            return Err(e);
        }
    };
    spinner.clear();
    report(&ctx, aoc, INPUT_FILE, aoc.save_input(year, day, INPUT_FILE, &input)?, year, day)?;

    if args.example {
        let example = tokio::task::spawn_blocking(move || client.example(year, day))
            .await
            .map_err(|e| AocError::Internal(format!("download task failed: {}", e)))?;
        match example {
            Ok(example) => {
                let written = aoc.save_input(year, day, EXAMPLE_FILE, &example)?;
                report(&ctx, aoc, EXAMPLE_FILE, written, year, day)?;
            }
            Err(AocError::UnrecognizedResponse(_)) => {
                ui::step_warn(&ctx, "No example found in the puzzle text");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn report(
    ctx: &UiContext,
    aoc: &Aoc,
    name: &str,
    written: Option<PathBuf>,
    year: u16,
    day: u8,
) -> AocResult<()> {
    match written {
        Some(path) => ui::step_ok(ctx, &format!("Wrote {}", path.display())),
        None => {
            let path = aoc.input_file(year, day, name)?;
            ui::step_info(ctx, &format!("Keeping existing {}", path.display()));
        }
    }
    Ok(())
}
