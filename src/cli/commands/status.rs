//! Status command - show the cached result of a puzzle

use crate::app::Aoc;
use crate::cache::entry::display_duration;
use crate::cache::PuzzleRecord;
use crate::cli::args::{OutputFormat, StatusArgs};
use crate::error::AocResult;
use crate::puzzle::Puzzle;
use crate::ui::{self, UiContext};
use console::style;
use serde::Serialize;

/// Execute the status command
pub async fn execute(args: StatusArgs, aoc: &Aoc) -> AocResult<()> {
    let puzzle = args.puzzle.puzzle()?;
    let record = aoc.status(puzzle.year, puzzle.day, puzzle.part, &puzzle.input)?;

    match args.format {
        OutputFormat::Text => {
            print_record(&puzzle, record.as_ref());
            Ok(())
        }
        OutputFormat::Json => print_json(&puzzle, record),
    }
}

/// Human-readable record, shared with lock and unlock
pub(crate) fn print_record(puzzle: &Puzzle, record: Option<&PuzzleRecord>) {
    let Some(record) = record else {
        println!("No record of running {}", puzzle);
        return;
    };

    let ctx = UiContext::detect();
    println!("{}", style(puzzle).bold());
    if record.locked {
        println!("{}", style("▣ Locked").green());
        ui::key_value(&ctx, "Lock res", &record.res);
        ui::key_value(&ctx, "Best dur", &display_duration(record.dur));
    } else {
        println!("{}", style("□ Unlocked").yellow());
        ui::key_value(&ctx, "Last res", display_or_dash(&record.res));
        ui::key_value(&ctx, "Last dur", &display_duration(record.dur));
    }
}

fn display_or_dash(res: &str) -> &str {
    if res.is_empty() {
        "-"
    } else {
        res
    }
}

fn print_json(puzzle: &Puzzle, record: Option<PuzzleRecord>) -> AocResult<()> {
    #[derive(Serialize)]
    struct StatusJson<'a> {
        puzzle: String,
        input: &'a str,
        record: Option<PuzzleRecord>,
    }

    let json = StatusJson {
        puzzle: puzzle.label(),
        input: &puzzle.input,
        record,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
