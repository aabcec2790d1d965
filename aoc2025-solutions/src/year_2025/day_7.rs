//! Day 7: a tachyon beam through a field of splitters

use crate::utils::grid::Grid;
use crate::utils::parse::invalid;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const START: u8 = b'S';
const SPLITTER: u8 = b'^';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 7, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    start: (usize, usize),
    common_result: Option<CommonResult>,
}

#[derive(Debug)]
pub struct CommonResult {
    splits: u64,
    timelines: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input, b".S^").map_err(invalid)?;
        let starts: Vec<_> = grid.positions(START).take(2).collect();
        let start = match starts[..] {
            [start] => start,
            [] => return Err(ParseError::MissingData("no beam entry 'S'".into())),
            _ => return Err(invalid(anyhow!("more than one beam entry 'S'"))),
        };

        Ok(SharedData {
            grid,
            start,
            common_result: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).splits.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).timelines.to_string())
    }
}

/// Beams travel down one row at a time. A splitter sends a beam to both
/// sides; beams meeting in a column merge, but the number of timelines
/// reaching each column adds up. Beams leaving the sides are lost.
fn solve_once_for_both(shared: &mut SharedData) -> &CommonResult {
    shared.common_result.get_or_insert_with(|| {
        let grid = &shared.grid;
        let (sx, sy) = shared.start;
        let mut timelines = vec![0u64; grid.width()];
        timelines[sx] = 1;
        let mut splits = 0;

        for y in sy + 1..grid.height() {
            let row = grid.row(y);
            let mut next = vec![0u64; grid.width()];
            for (x, &count) in timelines.iter().enumerate().filter(|(_, c)| **c > 0) {
                if row[x] != SPLITTER {
                    next[x] += count;
                    continue;
                }
                splits += 1;
                if let Some(left) = x.checked_sub(1) {
                    next[left] += count;
                }
                if let Some(right) = next.get_mut(x + 1) {
                    *right += count;
                }
            }
            timelines = next;
        }

        CommonResult {
            splits,
            timelines: timelines.iter().sum(),
        }
    })
}
