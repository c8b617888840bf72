//! Puzzle identity
//!
//! A puzzle run is identified by `(year, day, part, input)`. The same
//! identity always maps to the same cache key, solution entry point, and
//! input file inside the workspace.

use crate::cache::{input_basename, CacheKey, PuzzleId};
use crate::error::{AocError, AocResult};
use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};
use std::fmt;
use std::path::{Path, PathBuf};

/// First year puzzles were published
pub const FIRST_YEAR: u16 = 2015;
/// Puzzles are released at midnight in this offset (UTC-5)
const RELEASE_OFFSET_SECS: i32 = 5 * 3600;

/// One runnable puzzle part paired with an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Input file name inside `{year}/input/day{day}/`
    pub input: String,
}

impl Puzzle {
    /// Validate and build an identity
    pub fn new(year: u16, day: u8, part: u8, input: impl Into<String>) -> AocResult<Self> {
        let input = input.into();

        if year < FIRST_YEAR {
            return Err(AocError::InvalidPuzzle(format!(
                "year {} is before {}",
                year, FIRST_YEAR
            )));
        }
        if !(1..=25).contains(&day) {
            return Err(AocError::InvalidPuzzle(format!(
                "day {} is not between 1 and 25",
                day
            )));
        }
        if !(1..=2).contains(&part) {
            return Err(AocError::InvalidPuzzle(format!(
                "part {} is not 1 or 2",
                part
            )));
        }
        validate_input_name(&input)?;

        Ok(Self {
            year,
            day,
            part,
            input,
        })
    }

    /// Rebuild an identity from an id that carries the full input file name
    ///
    /// Cache directory names drop `.txt` and cannot be reversed this way; the
    /// last run pointer stores [`Puzzle::pointer`] instead.
    pub fn from_id(id: &PuzzleId) -> AocResult<Self> {
        Self::new(id.year, id.day, id.part, id.input.clone())
    }

    /// `{year}-day{day}-part{part}-{input}` with the input name untouched
    pub fn pointer(&self) -> String {
        format!("{}-day{}-part{}-{}", self.year, self.day, self.part, self.input)
    }

    /// `{year}/day{day}/part{part}`
    pub fn label(&self) -> String {
        format!("{}/day{}/part{}", self.year, self.day, self.part)
    }

    /// Cache key of this identity
    pub fn key(&self) -> CacheKey {
        CacheKey::puzzle(self.year, self.day, self.part, &self.input)
    }

    /// Input file basename as used in the cache key
    pub fn input_basename(&self) -> String {
        input_basename(&self.input)
    }

    /// Directory holding the day's input files
    pub fn input_dir(&self, workspace: &Path) -> PathBuf {
        workspace
            .join(self.year.to_string())
            .join("input")
            .join(format!("day{}", self.day))
    }

    /// Full path of the input file
    pub fn input_path(&self, workspace: &Path) -> PathBuf {
        self.input_dir(workspace).join(&self.input)
    }

    /// Name the solution is registered under
    pub fn entry_point(&self) -> String {
        entry_point(self.year, self.day, self.part)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {}", self.label(), self.input)
    }
}

/// `year{year}::day{day:02}::part{part}`
pub fn entry_point(year: u16, day: u8, part: u8) -> String {
    format!("year{}::day{:02}::part{}", year, day, part)
}

/// Year used when none is given
///
/// Puzzles of a new event appear on December 1st at midnight UTC-5; before
/// that moment the previous event is the current one.
pub fn default_year(now: DateTime<Utc>) -> u16 {
    let release = FixedOffset::west_opt(RELEASE_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    let local = now.with_timezone(&release);
    let year = if local.month() == 12 {
        local.year()
    } else {
        local.year() - 1
    };
    u16::try_from(year).unwrap_or(FIRST_YEAR).max(FIRST_YEAR)
}

/// Input files must be bare names inside the day's input directory
fn validate_input_name(input: &str) -> AocResult<()> {
    let invalid = |reason: &str| {
        Err(AocError::InvalidPuzzle(format!(
            "input {:?} {}",
            input, reason
        )))
    };

    if input.is_empty() {
        return invalid("is empty");
    }
    if input == "." || input == ".." {
        return invalid("is not a file name");
    }
    if input.contains('/') || input.contains('\\') {
        return invalid("must be a file name, not a path");
    }
    if input_basename(input).is_empty() {
        return invalid("has no base name");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn label_and_key() {
        let puzzle = Puzzle::new(2024, 1, 1, "input.txt").unwrap();
        assert_eq!(puzzle.label(), "2024/day1/part1");
        assert_eq!(puzzle.key().id(), "2024-day1-part1-input");
        assert_eq!(puzzle.entry_point(), "year2024::day01::part1");
        assert_eq!(puzzle.to_string(), "2024/day1/part1 with input.txt");
    }

    #[test]
    fn input_path_layout() {
        let puzzle = Puzzle::new(2023, 12, 2, "test.txt").unwrap();
        assert_eq!(
            puzzle.input_path(Path::new("/ws")),
            PathBuf::from("/ws/2023/input/day12/test.txt")
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Puzzle::new(2014, 1, 1, "input.txt").is_err());
        assert!(Puzzle::new(2024, 0, 1, "input.txt").is_err());
        assert!(Puzzle::new(2024, 26, 1, "input.txt").is_err());
        assert!(Puzzle::new(2024, 1, 3, "input.txt").is_err());
        assert!(Puzzle::new(2024, 1, 0, "input.txt").is_err());
    }

    #[test]
    fn rejects_paths_as_input() {
        for bad in ["", ".", "..", "../input.txt", "day1/input.txt", "a\\b"] {
            let err = Puzzle::new(2024, 1, 1, bad).unwrap_err();
            assert!(err.is_input_error(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn pointer_keeps_the_input_extension() {
        for input in ["test.txt", "data.csv", "my-input"] {
            let puzzle = Puzzle::new(2024, 3, 2, input).unwrap();
            let id = PuzzleId::parse(&puzzle.pointer()).unwrap();
            let back = Puzzle::from_id(&id).unwrap();
            assert_eq!(back, puzzle);
            assert_eq!(back.key(), puzzle.key());
        }
    }

    #[test]
    fn default_year_switches_at_release() {
        // 2024-12-01 04:59 UTC is still November 30th in UTC-5
        let before = Utc.with_ymd_and_hms(2024, 12, 1, 4, 59, 0).unwrap();
        assert_eq!(default_year(before), 2023);

        let after = Utc.with_ymd_and_hms(2024, 12, 1, 5, 0, 0).unwrap();
        assert_eq!(default_year(after), 2024);

        let january = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(default_year(january), 2024);
    }
}
