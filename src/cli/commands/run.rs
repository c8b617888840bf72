//! Run command - execute one solution against its lock

use crate::app::Aoc;
use crate::cli::args::PuzzleArgs;
use crate::error::AocResult;
use console::style;
use tracing::debug;

/// Execute the run command
pub async fn execute(args: PuzzleArgs, aoc: &Aoc) -> AocResult<()> {
    let puzzle = aoc.prepare(args.year(), args.day, args.part, &args.input)?;
    debug!("Runner entry point: {}", puzzle.entry_point());

    println!("{} {}", style("Running").bold(), puzzle);
    aoc.run_prepared(&puzzle).await
}
