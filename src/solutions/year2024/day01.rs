//! Day 1: Historian Hysteria

use std::collections::HashMap;

pub fn part1(input: &str) -> Result<u64, String> {
    let (mut left, mut right) = parse(input)?;
    left.sort_unstable();
    right.sort_unstable();

    Ok(left
        .iter()
        .zip(&right)
        .map(|(a, b)| a.abs_diff(*b))
        .sum())
}

pub fn part2(input: &str) -> Result<u64, String> {
    let (left, right) = parse(input)?;
    let mut counts: HashMap<u64, u64> = HashMap::new();
    for id in right {
        *counts.entry(id).or_default() += 1;
    }

    Ok(left
        .iter()
        .map(|id| id * counts.get(id).copied().unwrap_or(0))
        .sum())
}

fn parse(input: &str) -> Result<(Vec<u64>, Vec<u64>), String> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for (n, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace().map(str::parse::<u64>);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(Ok(a)), Some(Ok(b)), None) => {
                left.push(a);
                right.push(b);
            }
            _ => return Err(format!("line {}: expected two location ids", n + 1)),
        }
    }

    Ok((left, right))
}
