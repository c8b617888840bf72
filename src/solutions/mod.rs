//! Puzzle solutions compiled into this build
//!
//! Each year lives in its own module and registers its days here. A
//! solution takes the whole input file as text and returns anything
//! printable; errors are reported as a failed run.

use crate::registry::Registry;

mod year2024;

/// Registry of every solution in this build
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    year2024::register(&mut registry);
    registry
}
