//! Batch re-verification of locked puzzles
//!
//! Every locked entry is run concurrently through a [`PuzzleExecutor`]. A
//! single render loop owns the terminal, advancing spinners on a timer and
//! settling lines as results arrive. Line positions are fixed when the
//! check is scheduled.
//!
//! [`PuzzleExecutor`]: crate::executor::PuzzleExecutor

mod board;
mod orchestrator;
mod surface;

pub use board::{Board, CheckLine, LineState};
pub use orchestrator::{CheckOrchestrator, CheckSummary, Scheduled, TICK};
pub use surface::{for_context, LiveSurface, PlainSurface, Surface};
