//! aoc - puzzle solution runner with result locking
//!
//! Runs registered solutions against workspace inputs, caches each result
//! and duration per puzzle and input, and re-verifies locked results.

pub mod app;
pub mod cache;
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod lock;
pub mod puzzle;
pub mod registry;
pub mod remote;
pub mod runner;
pub mod scaffold;
pub mod solutions;
pub mod ui;

pub use app::Aoc;
pub use error::{AocError, AocResult};
