//! Day 1: a combination dial numbered 0..100, starting at 50

use crate::utils::parse::parse_lines;
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const DIAL_SIZE: i64 = 100;
const START: i64 = 50;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// Signed clicks, left is negative
    rotations: Vec<i64>,
    common_result: Option<CommonResult>,
}

#[derive(Debug)]
pub struct CommonResult {
    /// Rotations that end on 0
    zero_counts: u64,
    /// Clicks that land on 0, mid-rotation included
    pass_zero_counts: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rotations = parse_lines(input, |line| {
            let (direction, clicks) = line.split_at_checked(1).ok_or_else(|| anyhow!("missing direction"))?;
            let clicks: i64 = clicks.parse()?;
            if clicks < 0 {
                bail!("rotation must be non-negative, got {}", clicks);
            }
            match direction {
                "L" => Ok(-clicks),
                "R" => Ok(clicks),
                other => bail!("direction must be 'L' or 'R', got {:?}", other),
            }
        })?;

        Ok(SharedData {
            rotations,
            common_result: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).zero_counts.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).pass_zero_counts.to_string())
    }
}

/// Times a rotation of `delta` clicks from `position` lands on 0.
fn zero_clicks(position: i64, delta: i64) -> u64 {
    let clicks = if delta >= 0 {
        (position + delta) / DIAL_SIZE
    } else if position == 0 {
        -delta / DIAL_SIZE
    } else if -delta >= position {
        (-delta - position) / DIAL_SIZE + 1
    } else {
        0
    };
    clicks as u64
}

fn solve_once_for_both(shared: &mut SharedData) -> &CommonResult {
    shared.common_result.get_or_insert_with(|| {
        let (_, zero_counts, pass_zero_counts) = shared.rotations.iter().fold(
            (START, 0, 0),
            |(position, zero_counts, pass_zero_counts), &delta| {
                let next = (position + delta).rem_euclid(DIAL_SIZE);
                (
                    next,
                    zero_counts + u64::from(next == 0),
                    pass_zero_counts + zero_clicks(position, delta),
                )
            },
        );

        CommonResult {
            zero_counts,
            pass_zero_counts,
        }
    })
}
