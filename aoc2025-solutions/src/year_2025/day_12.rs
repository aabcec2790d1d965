//! Day 12: fitting presents under the Christmas trees

use crate::utils::packing::{Region, Shape, ShapeCatalog};
use crate::utils::parse::{invalid, separated};
use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2025, day = 12, tags = ["backtracking", "packing"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    catalog: ShapeCatalog,
    regions: Vec<Region>,
}

/// `WxH: c0 c1 ..`
fn parse_region(line: &str) -> anyhow::Result<Region> {
    let (size, counts) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("expected `WxH: counts..`"))?;
    let (width, height) = size
        .split_once('x')
        .ok_or_else(|| anyhow!("expected a `WxH` size, got {:?}", size))?;
    let counts = counts
        .split_whitespace()
        .map(|c| c.parse::<usize>().with_context(|| format!("invalid count {:?}", c)))
        .collect::<anyhow::Result<_>>()?;
    Ok(Region::new(width.trim().parse()?, height.trim().parse()?, counts))
}

fn parse_presents(input: &str) -> anyhow::Result<SharedData> {
    let mut lines = input.lines().map(str::trim).enumerate().peekable();
    let mut shapes = Vec::new();
    let mut regions = Vec::new();

    while let Some((idx, line)) = lines.next() {
        if line.is_empty() {
            continue;
        }
        let context = || format!("(line {})", idx + 1);

        if let Some(header) = line.strip_suffix(':') {
            // shape `N:` followed by its rows of `#` and `.`
            let [id] = separated::<usize>(header, ' ')
                .ok()
                .and_then(|v| v.try_into().ok())
                .ok_or_else(|| anyhow!("invalid shape header {:?}", line))
                .with_context(context)?;
            if id != shapes.len() {
                bail!("(line {}) expected shape {}, found {}", idx + 1, shapes.len(), id);
            }

            let mut cells = Vec::new();
            let mut y = 0;
            while let Some((row_idx, row)) = lines.next_if(|(_, row)| !row.is_empty()) {
                for (x, b) in row.bytes().enumerate() {
                    match b {
                        b'#' => cells.push((x, y)),
                        b'.' => {}
                        _ => bail!("(line {}) unexpected {:?} in shape", row_idx + 1, b as char),
                    }
                }
                y += 1;
            }
            shapes.push(Shape::new(id, cells).with_context(context)?);
        } else {
            regions.push(parse_region(line).with_context(context)?);
        }
    }

    if shapes.is_empty() {
        bail!("no present shapes");
    }
    Ok(SharedData {
        catalog: ShapeCatalog::new(shapes),
        regions,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_presents(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fitting = shared
            .regions
            .iter()
            .filter(|region| shared.catalog.fits(region))
            .count();
        Ok(fitting.to_string())
    }
}
