//! 2024 solutions

use crate::registry::Registry;

mod day01;

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(2024, 1, 1, day01::part1)
        .register(2024, 1, 2, day01::part2);
}
