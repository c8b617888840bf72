//! Lock and unlock commands

use super::status::print_record;
use crate::app::Aoc;
use crate::cli::args::PuzzleArgs;
use crate::error::AocResult;

/// Execute the lock command
pub async fn lock(args: PuzzleArgs, aoc: &Aoc) -> AocResult<()> {
    let puzzle = args.puzzle()?;
    let record = aoc.lock(puzzle.year, puzzle.day, puzzle.part, &puzzle.input)?;
    print_record(&puzzle, record.as_ref());
    Ok(())
}

/// Execute the unlock command
pub async fn unlock(args: PuzzleArgs, aoc: &Aoc) -> AocResult<()> {
    let puzzle = args.puzzle()?;
    let record = aoc.unlock(puzzle.year, puzzle.day, puzzle.part, &puzzle.input)?;
    print_record(&puzzle, record.as_ref());
    Ok(())
}
