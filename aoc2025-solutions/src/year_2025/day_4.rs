//! Day 4: paper rolls a forklift can reach

use crate::utils::grid::Grid;
use crate::utils::parse::invalid;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';
/// A roll is reachable with fewer neighbouring rolls than this
const CROWDED: usize = 4;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid", "flood-fill"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input, &[ROLL, EMPTY]).map_err(invalid)
    }
}

fn roll_neighbours(grid: &Grid, x: usize, y: usize) -> usize {
    grid.neighbours8(x, y)
        .filter(|&(nx, ny)| grid.get(nx, ny) == Some(ROLL))
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid = shared;
        let reachable = grid
            .positions(ROLL)
            .filter(|&(x, y)| roll_neighbours(grid, x, y) < CROWDED)
            .count();
        Ok(reachable.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Removing a roll can only free its neighbours, so each roll is
    /// queued at most once, when its count first drops below the limit.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = shared;
        let width = grid.width();
        let mut neighbours = vec![0; width * grid.height()];
        let mut queue = VecDeque::new();

        for (x, y) in grid.positions(ROLL) {
            let count = roll_neighbours(grid, x, y);
            neighbours[y * width + x] = count;
            if count < CROWDED {
                queue.push_back((x, y));
            }
        }

        let mut removed = 0;
        while let Some((x, y)) = queue.pop_front() {
            grid.set(x, y, EMPTY);
            removed += 1;

            let freed: Vec<_> = grid
                .neighbours8(x, y)
                .filter(|&(nx, ny)| grid.get(nx, ny) == Some(ROLL))
                .collect();
            for (nx, ny) in freed {
                let count = &mut neighbours[ny * width + nx];
                *count -= 1;
                if *count == CROWDED - 1 {
                    queue.push_back((nx, ny));
                }
            }
        }

        Ok(removed.to_string())
    }
}
