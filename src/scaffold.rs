//! Day scaffolding
//!
//! `aoc init` lays out the files a new day needs: empty `input.txt` and
//! `test.txt` in the workspace, plus a solution module stub under the
//! source tree. Files that already exist are never touched.

use crate::error::{AocError, AocResult};
use crate::puzzle::Puzzle;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input files created for every day
pub const DAY_INPUTS: [&str; 2] = ["input.txt", "test.txt"];

/// What happened to one scaffolded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scaffolded {
    Created(PathBuf),
    Kept(PathBuf),
}

impl Scaffolded {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// `{source}/src/solutions/year{year}/day{day:02}.rs`
pub fn solution_path(source: &Path, year: u16, day: u8) -> PathBuf {
    source
        .join("src")
        .join("solutions")
        .join(format!("year{}", year))
        .join(format!("day{:02}.rs", day))
}

/// Create the day's input files and solution stub
pub fn scaffold_day(
    workspace: &Path,
    source: &Path,
    year: u16,
    day: u8,
) -> AocResult<Vec<Scaffolded>> {
    let first = Puzzle::new(year, day, 1, DAY_INPUTS[0])?;
    let input_dir = first.input_dir(workspace);

    let mut files = Vec::with_capacity(DAY_INPUTS.len() + 1);
    for name in DAY_INPUTS {
        files.push(create_new(&input_dir.join(name), "")?);
    }
    files.push(create_new(
        &solution_path(source, year, day),
        &solution_stub(day),
    )?);
    Ok(files)
}

/// Module body for a fresh day: both parts compile and report themselves unsolved
fn solution_stub(day: u8) -> String {
    format!(
        r#"//! Day {day}

pub fn part1(input: &str) -> Result<u64, String> {{
    let _lines = input.lines();
    Err("not implemented".to_string())
}}

pub fn part2(input: &str) -> Result<u64, String> {{
    let _lines = input.lines();
    Err("not implemented".to_string())
}}
"#
    )
}

fn create_new(path: &Path, contents: &str) -> AocResult<Scaffolded> {
    if path.exists() {
        debug!("Skipping {}, already exists", path.display());
        return Ok(Scaffolded::Kept(path.to_path_buf()));
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| AocError::io(format!("creating {}", dir.display()), e))?;
    }
    fs::write(path, contents)
        .map_err(|e| AocError::io(format!("writing {}", path.display()), e))?;
    debug!("Created {}", path.display());
    Ok(Scaffolded::Created(path.to_path_buf()))
}
