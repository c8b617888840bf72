//! Local result cache
//!
//! Remembers, per puzzle identity, the generated runner plus the last or
//! locked result and the last or best duration.
//!
//! # Layout
//!
//! ```text
//! <root>/config/<id>/<file>
//! <root>/puzzles/<year>-day<day>-part<part>-<input>/{runner, lock, res, dur}
//! ```
//!
//! # Entry Files
//!
//! | File | Written by | Unlocked | Locked |
//! |------|------------|----------|--------|
//! | runner | generator, once | - | - |
//! | lock | lock/unlock, submit | `false` | `true` |
//! | res | runner | last result | verified result, never rewritten |
//! | dur | runner | last duration | best duration, only improves |

pub mod entry;
mod guard;
pub mod key;
mod store;

pub use entry::{PuzzleRecord, DURATION_SENTINEL};
pub use guard::EntryGuard;
pub use key::{input_basename, CacheKey, Namespace, PuzzleId};
pub use store::{CacheStore, PuzzleEntries, PuzzleEntry};
