//! Day 6: a cephalopod math worksheet laid out in columns

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::ops::Range;

use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
}

impl Op {
    fn apply(self, numbers: impl Iterator<Item = u64>) -> u64 {
        match self {
            Op::Add => numbers.sum(),
            Op::Mul => numbers.product(),
        }
    }
}

#[derive(Debug)]
struct Problem {
    op: Op,
    columns: Range<usize>,
}

#[derive(Debug)]
pub struct Worksheet<'a> {
    /// Digit rows above the operator row, unpadded
    rows: Vec<&'a str>,
    problems: Vec<Problem>,
}

/// Byte at column `c`, blank past the end of the line
fn cell(row: &str, c: usize) -> u8 {
    row.as_bytes().get(c).copied().unwrap_or(b' ')
}

fn parse_worksheet(input: &str) -> anyhow::Result<Worksheet<'_>> {
    let mut lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
    let ops = lines.pop().ok_or_else(|| anyhow!("empty worksheet"))?;
    if lines.is_empty() {
        bail!("worksheet has no number rows");
    }
    for (idx, row) in lines.iter().enumerate() {
        if let Some(c) = row.bytes().position(|b| !(b.is_ascii_digit() || b == b' ')) {
            bail!("(row {}) unexpected {:?} at column {}", idx + 1, cell(row, c) as char, c + 1);
        }
    }

    let width = lines.iter().chain([&ops]).map(|l| l.len()).max().unwrap_or(0);
    let blank = |c: usize| cell(ops, c) == b' ' && lines.iter().all(|row| cell(row, c) == b' ');

    let mut problems = Vec::new();
    let mut start = 0;
    for end in (0..=width).filter(|&c| c == width || blank(c)) {
        if end > start {
            let op = match ops.get(start..end.min(ops.len())).unwrap_or("").trim() {
                "+" => Op::Add,
                "*" => Op::Mul,
                other => bail!("columns {}-{}: expected one operator, got {:?}", start + 1, end, other),
            };
            problems.push(Problem {
                op,
                columns: start..end,
            });
        }
        start = end + 1;
    }

    Ok(Worksheet {
        rows: lines,
        problems,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Worksheet<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_worksheet(input).map_err(invalid)
    }
}

/// Numbers spelled by `digits`, skipping blank groups
fn number(digits: impl Iterator<Item = u8>) -> Option<u64> {
    digits
        .filter(u8::is_ascii_digit)
        .fold(None, |acc, d| Some(acc.unwrap_or(0) * 10 + (d - b'0') as u64))
}

impl PartSolver<1> for Solver {
    /// Each row holds one number per problem
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .problems
            .iter()
            .map(|p| {
                let numbers = shared
                    .rows
                    .iter()
                    .filter_map(|row| number(p.columns.clone().map(|c| cell(row, c))));
                p.op.apply(numbers)
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Each column holds one number, most significant digit on top
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .problems
            .iter()
            .map(|p| {
                let numbers = p
                    .columns
                    .clone()
                    .filter_map(|c| number(shared.rows.iter().map(|row| cell(row, c))));
                p.op.apply(numbers)
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::harness::{TestCase, assert_cases};

    const EXAMPLE: &str = "\
123 328  51 64 
 45 64  387 23 
  6 98  215 314
*   +   *   +  
";

    #[test]
    fn example() {
        assert_cases::<Solver>(&[
            TestCase::new("example", 1, EXAMPLE, 4277556),
            TestCase::new("example", 2, EXAMPLE, 3263827),
        ]);
    }

    #[test]
    fn single_problem() {
        let sheet = "12\n 3\n+ ";
        assert_cases::<Solver>(&[
            TestCase::new("single", 1, sheet, 15),
            TestCase::new("single", 2, sheet, 24),
        ]);
    }

    #[test]
    fn malformed_sheets_are_rejected() {
        assert!(Solver::parse("1 2\n+").is_err());
        assert!(Solver::parse("1 2\n- +").is_err());
        assert!(Solver::parse("1x\n+").is_err());
        assert!(Solver::parse("+").is_err());
    }
}
