//! Runner process
//!
//! Executes one solution against its input and applies the lock rules to
//! the entry files:
//!
//! - Unlocked: the result and duration are recorded unconditionally.
//! - Locked, same result: the duration is rewritten only if it improved.
//! - Locked, different result: nothing is written and a regression line is
//!   printed. The process still exits successfully; callers detect the
//!   regression from the output.
//!
//! Solution failures and unreadable entry files are errors, which the
//! binary turns into a non-zero exit.

use super::manifest::RunnerManifest;
use crate::cache::entry::{format_duration, parse_duration, parse_lock};
use crate::cache::{EntryGuard, DURATION_SENTINEL};
use crate::error::{AocError, AocResult};
use crate::registry::Registry;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

/// Prefix of the line reporting a locked result mismatch
pub const REGRESSION_MARKER: &str = "Error:";

/// What a runner did with one execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Unlocked: result and duration stored
    Recorded { res: String, dur: Duration },
    /// Locked and the result matched
    Verified {
        res: String,
        dur: Duration,
        best: Option<Duration>,
        improved: bool,
    },
    /// Locked and the result did not match
    Regression { got: String, want: String },
}

/// Run the manifest's solution and update its entry, reporting to `out`
pub fn execute(
    manifest: &RunnerManifest,
    registry: &Registry,
    out: &mut impl Write,
) -> AocResult<Verdict> {
    let solver = registry
        .resolve(&manifest.entry)
        .ok_or_else(|| AocError::SolutionNotFound(manifest.puzzle.clone()))?;

    let input = fs::read(&manifest.input).map_err(|e| {
        AocError::io(format!("reading input {}", manifest.input.display()), e)
    })?;
    let input = String::from_utf8_lossy(&input);

    let _guard = EntryGuard::acquire(&manifest.guard)?;
    let locked = parse_lock(&read_entry_file(&manifest.lock)?);
    let want = read_entry_file(&manifest.res)?.trim().to_string();
    let best = match fs::read_to_string(&manifest.dur) {
        Ok(text) => parse_duration(&text).filter(|d| *d != DURATION_SENTINEL),
        Err(_) => None,
    };

    debug!("Running {} (locked: {})", manifest.entry, locked);
    let start = Instant::now();
    let outcome = solver(&input);
    let dur = start.elapsed();

    let res = outcome
        .map_err(|reason| AocError::SolutionFailed {
            puzzle: manifest.puzzle.clone(),
            reason,
        })?
        .trim()
        .to_string();

    if !locked {
        write_entry_file(&manifest.res, &res)?;
        write_entry_file(&manifest.dur, &format_duration(dur))?;
        report(out, &format!("Res: {}", res))?;
        report(out, &format!("Dur: {:?}", dur))?;
        return Ok(Verdict::Recorded { res, dur });
    }

    if res != want {
        report(out, &regression_line(&res, &want))?;
        return Ok(Verdict::Regression { got: res, want });
    }

    let improved = best.map_or(true, |best| dur < best);
    if improved {
        write_entry_file(&manifest.dur, &format_duration(dur))?;
    }
    report(out, &format!("Res: {}", res))?;
    report(out, &format!("Dur: {}", compare_durations(dur, best)))?;

    Ok(Verdict::Verified {
        res,
        dur,
        best,
        improved,
    })
}

/// `Error: res: {got}, want {want}`
pub fn regression_line(got: &str, want: &str) -> String {
    format!("{} res: {}, want {}", REGRESSION_MARKER, got, want)
}

/// Inverse of [`regression_line`]
pub fn parse_regression_line(line: &str) -> Option<(String, String)> {
    let rest = line.trim().strip_prefix(REGRESSION_MARKER)?.trim_start();
    let rest = rest.strip_prefix("res: ")?;
    let (got, want) = rest.rsplit_once(", want ")?;
    Some((got.to_string(), want.to_string()))
}

/// `12ms (-3ms, -20.00%)` relative to the stored best
fn compare_durations(dur: Duration, best: Option<Duration>) -> String {
    let Some(best) = best else {
        return format!("{:?}", dur);
    };

    let (sign, diff) = if dur < best {
        ("-", best - dur)
    } else {
        ("+", dur - best)
    };
    let pct = if best.is_zero() {
        0.0
    } else {
        diff.as_secs_f64() / best.as_secs_f64() * 100.0
    };
    format!("{:?} ({}{:?}, {}{:.2}%)", dur, sign, diff, sign, pct)
}

fn read_entry_file(path: &Path) -> AocResult<String> {
    fs::read_to_string(path).map_err(|e| AocError::io(format!("reading {}", path.display()), e))
}

fn write_entry_file(path: &Path, contents: &str) -> AocResult<()> {
    fs::write(path, contents).map_err(|e| AocError::io(format!("writing {}", path.display()), e))
}

fn report(out: &mut impl Write, line: &str) -> AocResult<()> {
    writeln!(out, "{}", line).map_err(|e| AocError::io("writing runner output", e))
}
