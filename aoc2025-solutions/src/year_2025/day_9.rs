//! Day 9: the largest rectangle between two red tiles

use crate::utils::parse::{fixed, parse_lines};
use crate::utils::scanline::{ContainmentIndex, Point2, Polygon};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9, tags = ["geometry", "scanline"])]
pub struct Solver;

impl AocParser for Solver {
    /// Red tiles in loop order
    type SharedData<'a> = Vec<Point2>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let [x, y] = fixed(line, ',')?;
            Ok(Point2::new(x, y))
        })
    }
}

/// Corners as `(x_min, x_max, y_min, y_max)` with the tile count inside
fn rectangle(a: Point2, b: Point2) -> ((i64, i64, i64, i64), u64) {
    let bounds = (a.x.min(b.x), a.x.max(b.x), a.y.min(b.y), a.y.max(b.y));
    let area = (a.x.abs_diff(b.x) + 1) * (a.y.abs_diff(b.y) + 1);
    (bounds, area)
}

fn too_few_tiles() -> SolveError {
    SolveError::failed(anyhow!("need at least two red tiles"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .tuple_combinations()
            .map(|(&a, &b)| rectangle(a, b).1)
            .max()
            .map(|area| area.to_string())
            .ok_or_else(too_few_tiles)
    }
}

impl PartSolver<2> for Solver {
    /// Candidates are tried largest first; the first one inside the loop
    /// of red and green tiles wins.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let polygon = Polygon::new(shared).map_err(SolveError::failed)?;
        let index = ContainmentIndex::new(&polygon).map_err(SolveError::failed)?;

        let candidates = shared
            .iter()
            .tuple_combinations()
            .map(|(&a, &b)| rectangle(a, b))
            .sorted_unstable_by_key(|&(_, area)| std::cmp::Reverse(area))
            .collect_vec();
        if candidates.is_empty() {
            return Err(too_few_tiles());
        }

        candidates
            .into_iter()
            .find(|&((x_min, x_max, y_min, y_max), _)| index.contains_rect(x_min, x_max, y_min, y_max))
            .map(|(_, area)| area.to_string())
            .ok_or_else(|| SolveError::failed(anyhow!("no rectangle fits inside the tile loop")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::harness::{TestCase, assert_cases};

    const EXAMPLE: &str = "7,1\n11,1\n11,7\n9,7\n9,5\n2,5\n2,3\n7,3\n";
    const SQUARE: &str = "0,0\n4,0\n4,4\n0,4";
    const L_SHAPE: &str = "0,0\n6,0\n6,2\n2,2\n2,6\n0,6";

    #[test]
    fn example() {
        assert_cases::<Solver>(&[
            TestCase::new("example", 1, EXAMPLE, 50),
            TestCase::new("example", 2, EXAMPLE, 24),
        ]);
    }

    #[test]
    fn convex_and_concave_loops() {
        assert_cases::<Solver>(&[
            TestCase::new("square", 1, SQUARE, 25),
            TestCase::new("square", 2, SQUARE, 25),
            TestCase::new("L", 1, L_SHAPE, 49),
            TestCase::new("L", 2, L_SHAPE, 21),
        ]);
    }

    #[test]
    fn degenerate_inputs_are_errors() {
        let mut single = Solver::parse("3,3").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut single).is_err());

        let mut diagonal = Solver::parse("0,0\n2,2\n0,2").unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&mut diagonal).is_err());
        assert!(Solver::parse("1;2").is_err());
    }
}
