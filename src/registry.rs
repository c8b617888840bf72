//! Solution registry
//!
//! Solutions are plain functions from the puzzle input to a printable
//! answer. They are registered under their entry-point name
//! (`year2024::day01::part1`), which is also what generated runners refer
//! to.

use crate::puzzle::{entry_point, Puzzle};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::sync::Arc;

/// A registered solution with its output and error already rendered
pub type Solver = Arc<dyn Fn(&str) -> Result<String, String> + Send + Sync>;

/// All solutions known to this build
#[derive(Clone, Default)]
pub struct Registry {
    solvers: BTreeMap<String, Solver>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a solution for one puzzle part, replacing any previous one
    pub fn register<F, T, E>(&mut self, year: u16, day: u8, part: u8, solve: F) -> &mut Self
    where
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
        T: Display,
        E: Display,
    {
        let solver: Solver = Arc::new(move |input: &str| {
            solve(input)
                .map(|answer| answer.to_string())
                .map_err(|e| e.to_string())
        });
        self.solvers.insert(entry_point(year, day, part), solver);
        self
    }

    /// Look up a solution by entry-point name
    pub fn resolve(&self, entry: &str) -> Option<&Solver> {
        self.solvers.get(entry)
    }

    /// Whether a solution exists for the puzzle's year, day and part
    pub fn contains(&self, puzzle: &Puzzle) -> bool {
        self.solvers.contains_key(&puzzle.entry_point())
    }

    /// Registered entry points in sorted order
    pub fn entry_points(&self) -> impl Iterator<Item = &str> {
        self.solvers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("solvers", &self.entry_points().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_lines(input: &str) -> Result<usize, String> {
        Ok(input.lines().count())
    }

    #[test]
    fn register_and_resolve() {
        let mut registry = Registry::new();
        registry.register(2024, 1, 1, count_lines);

        let solver = registry.resolve("year2024::day01::part1").unwrap();
        assert_eq!(solver("a\nb\nc").unwrap(), "3");
        assert!(registry.resolve("year2024::day01::part2").is_none());
    }

    #[test]
    fn errors_are_rendered() {
        let mut registry = Registry::new();
        registry.register(2024, 2, 1, |input: &str| input.trim().parse::<i64>());

        let solver = registry.resolve("year2024::day02::part1").unwrap();
        assert_eq!(solver(" 42\n").unwrap(), "42");
        assert_eq!(solver("x").unwrap_err(), "invalid digit found in string");
    }

    #[test]
    fn contains_by_identity() {
        let mut registry = Registry::new();
        registry.register(2024, 1, 2, count_lines);

        // Any input file uses the same solution.
        assert!(registry.contains(&Puzzle::new(2024, 1, 2, "input.txt").unwrap()));
        assert!(registry.contains(&Puzzle::new(2024, 1, 2, "test.txt").unwrap()));
        assert!(!registry.contains(&Puzzle::new(2024, 1, 1, "input.txt").unwrap()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn entry_points_sorted() {
        let mut registry = Registry::new();
        registry
            .register(2024, 2, 1, count_lines)
            .register(2023, 25, 1, count_lines)
            .register(2024, 1, 2, count_lines);

        let entries: Vec<&str> = registry.entry_points().collect();
        assert_eq!(
            entries,
            vec![
                "year2023::day25::part1",
                "year2024::day01::part2",
                "year2024::day02::part1"
            ]
        );
        assert!(format!("{:?}", registry).contains("year2023::day25::part1"));
        assert!(Registry::new().is_empty());
    }
}
