//! Cache keys
//!
//! A key is a namespace plus a derived string id. Puzzle ids are pure string
//! formatting of the puzzle identity, so the store needs no index: listing a
//! namespace directory and parsing the names is enough to enumerate it.

use crate::error::{AocError, AocResult};
use std::cmp::Ordering;
use std::fmt;

/// Extension of downloaded inputs, dropped from cache ids
pub const INPUT_EXTENSION: &str = ".txt";

/// Top-level cache namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Opaque single-file blobs (session token, last run pointer)
    Config,
    /// One entry per puzzle identity
    Puzzles,
}

impl Namespace {
    /// Directory name under the cache root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Puzzles => "puzzles",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Address of one cache entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    namespace: Namespace,
    id: String,
}

impl CacheKey {
    /// Key for a config blob such as `user`
    pub fn config(domain: impl Into<String>) -> Self {
        Self {
            namespace: Namespace::Config,
            id: domain.into(),
        }
    }

    /// Key for a puzzle identity: `{year}-day{day}-part{part}-{input-basename}`
    pub fn puzzle(year: u16, day: u8, part: u8, input: &str) -> Self {
        Self {
            namespace: Namespace::Puzzles,
            id: format!(
                "{}-day{}-part{}-{}",
                year,
                day,
                part,
                input_basename(input)
            ),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.id)
    }
}

/// Input file name with a trailing `.txt` dropped (`input.txt` -> `input`)
///
/// Other extensions are kept, so `data.txt` and `data.csv` stay distinct.
pub fn input_basename(input: &str) -> String {
    input.strip_suffix(INPUT_EXTENSION).unwrap_or(input).to_string()
}

/// A puzzle id parsed back into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Input part of the id, verbatim
    pub input: String,
}

impl PuzzleId {
    /// Parse `{year}-day{day}-part{part}-{input}`
    ///
    /// The input basename may itself contain dashes.
    pub fn parse(id: &str) -> AocResult<Self> {
        let malformed = |reason: &str| AocError::MalformedKey {
            id: id.to_string(),
            reason: reason.to_string(),
        };

        let mut fields = id.splitn(4, '-');
        let year = fields
            .next()
            .and_then(|s| s.parse::<u16>().ok())
            .ok_or_else(|| malformed("year is not a number"))?;
        let day = fields
            .next()
            .and_then(|s| s.strip_prefix("day"))
            .and_then(|s| s.parse::<u8>().ok())
            .ok_or_else(|| malformed("expected day<N>"))?;
        let part = fields
            .next()
            .and_then(|s| s.strip_prefix("part"))
            .and_then(|s| s.parse::<u8>().ok())
            .ok_or_else(|| malformed("expected part<N>"))?;
        let input = fields
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| malformed("missing input name"))?;

        Ok(Self {
            year,
            day,
            part,
            input: input.to_string(),
        })
    }

    /// The key this id was derived from
    pub fn key(&self) -> CacheKey {
        // The basename is already stripped; stripping again would eat dots.
        CacheKey {
            namespace: Namespace::Puzzles,
            id: format!(
                "{}-day{}-part{}-{}",
                self.year, self.day, self.part, self.input
            ),
        }
    }

    /// Enumeration order: year, day, part; input order is unspecified
    pub fn schedule_order(&self, other: &Self) -> Ordering {
        (self.year, self.day, self.part).cmp(&(other.year, other.day, other.part))
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/day{}/part{} ({})",
            self.year, self.day, self.part, self.input
        )
    }
}
