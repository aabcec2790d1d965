//! Day 5: fresh ingredient id ranges

use crate::utils::parse::{fixed, parse_numbered_lines};
use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["intervals"])]
pub struct Solver;

#[derive(Debug)]
pub struct Inventory {
    /// Inclusive `(first, last)` id ranges
    fresh: Vec<(u64, u64)>,
    available: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().enumerate();
        let ranges = lines.by_ref().take_while(|(_, line)| !line.trim().is_empty());
        let fresh = parse_numbered_lines(ranges, |line| {
            let [first, last] = fixed(line, '-').context("expected a `first-last` range")?;
            if first > last {
                bail!("range {}-{} ends before it starts", first, last);
            }
            Ok((first, last))
        })?;

        let available = parse_numbered_lines(lines, |line| Ok(line.parse::<u64>()?))?;
        if available.is_empty() {
            return Err(ParseError::MissingData("no ingredient ids after the ranges".into()));
        }

        Ok(Inventory { fresh, available })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fresh = shared
            .available
            .iter()
            .filter(|&&id| shared.fresh.iter().any(|&(a, b)| (a..=b).contains(&id)))
            .count();
        Ok(fresh.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = merge(&shared.fresh).iter().map(|&(a, b)| b - a + 1).sum();
        Ok(total.to_string())
    }
}

/// Union of inclusive ranges, joining those that overlap or touch.
fn merge(ranges: &[(u64, u64)]) -> Vec<(u64, u64)> {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(sorted.len());
    for (first, last) in sorted {
        match merged.last_mut() {
            Some(prev) if first <= prev.1.saturating_add(1) => prev.1 = prev.1.max(last),
            _ => merged.push((first, last)),
        }
    }
    merged
}
