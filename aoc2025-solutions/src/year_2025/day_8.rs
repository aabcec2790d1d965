//! Day 8: wiring junction boxes into circuits, closest pairs first

use crate::utils::connectivity::{
    Edge, Point3, bridging_edge, largest_circuits_product, sorted_edges,
};
use crate::utils::parse::{fixed, parse_lines};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const CONNECTIONS: usize = 1000;
const LARGEST: usize = 3;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["graph", "union-find"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    boxes: Vec<Point3>,
    /// Sorted once, on first use by either part
    edges: Option<Vec<Edge>>,
}

impl SharedData {
    fn boxes_and_edges(&mut self) -> (&[Point3], &[Edge]) {
        let edges = self.edges.get_or_insert_with(|| sorted_edges(&self.boxes));
        (&self.boxes, edges)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let boxes = parse_lines(input, |line| {
            let [x, y, z] = fixed(line, ',')?;
            Ok(Point3::new(x, y, z))
        })?;
        Ok(SharedData { boxes, edges: None })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (boxes, edges) = shared.boxes_and_edges();
        Ok(largest_circuits_product(boxes, edges, CONNECTIONS, LARGEST).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (boxes, edges) = shared.boxes_and_edges();
        let edge = bridging_edge(boxes, edges).map_err(SolveError::failed)?;
        Ok((boxes[edge.a].x * boxes[edge.b].x).to_string())
    }
}
