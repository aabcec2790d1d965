//! Day 3: picking battery digits for the largest joltage

use crate::utils::parse::parse_lines;
use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Reverse;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["greedy"])]
pub struct Solver;

impl AocParser for Solver {
    /// One bank of digit values per line
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            line.bytes()
                .map(|b| match b {
                    b'0'..=b'9' => Ok(b - b'0'),
                    _ => bail!("unexpected {:?} in battery bank", b as char),
                })
                .collect()
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 12)
    }
}

fn total_joltage(banks: &[Vec<u8>], batteries: usize) -> Result<String, SolveError> {
    let mut total = 0;
    for (idx, bank) in banks.iter().enumerate() {
        total += max_joltage(bank, batteries).ok_or_else(|| {
            SolveError::failed(format!(
                "bank {} has {} batteries, need {}",
                idx + 1,
                bank.len(),
                batteries
            ))
        })?;
    }
    Ok(total.to_string())
}

/// Largest number spelled by `count` digits of `bank` taken in order.
///
/// Each digit is the leftmost maximum among the positions that still leave
/// enough digits after it.
fn max_joltage(bank: &[u8], count: usize) -> Option<u64> {
    if bank.len() < count {
        return None;
    }

    let mut value = 0;
    let mut start = 0;
    for left in (1..=count).rev() {
        let window = &bank[start..=bank.len() - left];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .max_by_key(|&(i, &d)| (d, Reverse(i)))?;
        value = value * 10 + digit as u64;
        start += offset + 1;
    }
    Some(value)
}
