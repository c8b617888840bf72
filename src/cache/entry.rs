//! Puzzle entry files and their text encodings

use serde::Serialize;
use std::time::Duration;

/// Generated runner manifest
pub const RUNNER: &str = "runner";
/// Lock flag, `true` or `false`
pub const LOCK: &str = "lock";
/// Last observed or locked result
pub const RES: &str = "res";
/// Last observed or best duration
pub const DUR: &str = "dur";
/// Advisory write guard, not part of the entry contract
pub const GUARD: &str = ".guard";

/// Config blob holding the session token
pub const SESSION: &str = "session";
/// Config blob holding the id of the last run puzzle
pub const LAST_RUN: &str = "last";

/// Stored before any run has been recorded, so every real run is faster
pub const DURATION_SENTINEL: Duration = Duration::from_nanos(u64::MAX);

/// Encode a duration for the `dur` file
pub fn format_duration(duration: Duration) -> String {
    let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
    format!("{}ns", nanos)
}

/// Decode the `dur` file; `None` means no usable record
pub fn parse_duration(text: &str) -> Option<Duration> {
    text.trim()
        .strip_suffix("ns")
        .and_then(|n| n.parse::<u64>().ok())
        .map(Duration::from_nanos)
}

/// Encode the lock flag
pub fn format_lock(locked: bool) -> &'static str {
    if locked {
        "true"
    } else {
        "false"
    }
}

/// Decode the lock flag; anything but `true` is unlocked
pub fn parse_lock(text: &str) -> bool {
    text.trim() == "true"
}

/// Human readable duration, `-` when nothing has been recorded
pub fn display_duration(duration: Option<Duration>) -> String {
    match duration {
        Some(d) if d != DURATION_SENTINEL => format!("{:?}", d),
        _ => "-".to_string(),
    }
}

/// Snapshot of one puzzle entry's lock/res/dur files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleRecord {
    pub locked: bool,
    pub res: String,
    #[serde(serialize_with = "serialize_duration")]
    pub dur: Option<Duration>,
}

impl PuzzleRecord {
    /// Decode the three entry files
    pub fn from_files(lock: &str, res: &str, dur: &str) -> Self {
        Self {
            locked: parse_lock(lock),
            res: res.trim().to_string(),
            dur: parse_duration(dur),
        }
    }

    /// Whether a duration other than the seed value is stored
    pub fn has_duration(&self) -> bool {
        matches!(self.dur, Some(d) if d != DURATION_SENTINEL)
    }
}

fn serialize_duration<S: serde::Serializer>(
    duration: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match duration {
        Some(d) if *d != DURATION_SENTINEL => serializer.serialize_some(&format_duration(*d)),
        _ => serializer.serialize_none(),
    }
}
