//! Day 2: ids made of a repeated digit block

use crate::utils::parse::{fixed, invalid};
use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["number-theory"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    first: u64,
    last: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<IdRange>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                let [first, last] = fixed::<u64, 2>(s, '-').with_context(|| format!("range {:?}", s))?;
                if first > last {
                    bail!("range {:?} ends before it starts", s);
                }
                Ok(IdRange { first, last })
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_repeated(shared, |repeats| repeats == 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_repeated(shared, |repeats| repeats >= 2).to_string())
    }
}

fn digits(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

/// Sum of distinct ids in `ranges` made of one block repeated a number of
/// times accepted by `repeats`.
fn sum_repeated(ranges: &[IdRange], repeats: impl Fn(u32) -> bool + Copy) -> u64 {
    ranges
        .iter()
        .flat_map(|range| repeated_in(*range, repeats))
        .unique()
        .sum()
}

/// Repeated-block ids in one range, possibly with duplicates (`1111` is
/// both `1` four times and `11` twice).
fn repeated_in(range: IdRange, repeats: impl Fn(u32) -> bool) -> impl Iterator<Item = u64> {
    let mut found = Vec::new();
    for len in digits(range.first)..=digits(range.last) {
        for block in (1..=len / 2).filter(|b| len % b == 0 && repeats(len / b)) {
            // block * repunit spells the block len / block times
            let repunit: u64 = (0..len / block).map(|i| 10u64.pow(i * block)).sum();
            let smallest = 10u64.pow(block - 1).max(range.first.div_ceil(repunit));
            let largest = (10u64.pow(block) - 1).min(range.last / repunit);
            found.extend((smallest..=largest).map(|b| b * repunit));
        }
    }
    found.into_iter()
}
