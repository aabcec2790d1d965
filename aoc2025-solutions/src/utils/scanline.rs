//! Interior intervals of axis-aligned polygons along horizontal scanlines
//!
//! A scanline at height `y` crosses every vertical edge whose half-open span
//! `[y_min, y_max)` holds `y`. Consecutive crossings pair up into interior
//! intervals (even-odd rule), horizontal edges lying on the scanline are
//! added as closed boundary intervals, and overlapping intervals merge.
//!
//! Heights are handled doubled internally so that a band between two
//! vertex rows can be sampled at its exact midpoint.

use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point2 {
    pub x: i64,
    pub y: i64,
}

impl Point2 {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Spans `[y_min, y_max)` at `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalEdge {
    pub x: i64,
    pub y_min: i64,
    pub y_max: i64,
}

/// Spans `[x_min, x_max]` at `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalEdge {
    pub y: i64,
    pub x_min: i64,
    pub x_max: i64,
}

/// Closed range `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn covers(&self, from: i64, to: i64) -> bool {
        self.start <= from && to <= self.end
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanlineError {
    #[error("edge from {from:?} to {to:?} is neither horizontal nor vertical")]
    DiagonalEdge { from: Point2, to: Point2 },
    #[error("{count} edge crossings on the scanline at doubled height {doubled_y}")]
    OddCrossings { doubled_y: i64, count: usize },
}

#[derive(Debug, Clone)]
pub struct Polygon {
    vertical: Vec<VerticalEdge>,
    horizontal: Vec<HorizontalEdge>,
    rows: Vec<i64>,
}

impl Polygon {
    /// Closed polygon through `vertices`, the last joined back to the first.
    pub fn new(vertices: &[Point2]) -> Result<Self, ScanlineError> {
        let mut vertical = Vec::new();
        let mut horizontal = Vec::new();

        for (&from, &to) in vertices.iter().circular_tuple_windows() {
            if from.x == to.x && from.y != to.y {
                vertical.push(VerticalEdge {
                    x: from.x,
                    y_min: from.y.min(to.y),
                    y_max: from.y.max(to.y),
                });
            } else if from.y == to.y {
                horizontal.push(HorizontalEdge {
                    y: from.y,
                    x_min: from.x.min(to.x),
                    x_max: from.x.max(to.x),
                });
            } else {
                return Err(ScanlineError::DiagonalEdge { from, to });
            }
        }

        Ok(Self::from_edges(vertical, horizontal))
    }

    pub fn from_edges(vertical: Vec<VerticalEdge>, horizontal: Vec<HorizontalEdge>) -> Self {
        let rows = vertical
            .iter()
            .flat_map(|e| [e.y_min, e.y_max])
            .chain(horizontal.iter().map(|e| e.y))
            .sorted_unstable()
            .dedup()
            .collect();
        Self {
            vertical,
            horizontal,
            rows,
        }
    }

    /// Distinct heights at which an edge starts, ends or lies, ascending
    pub fn rows(&self) -> &[i64] {
        &self.rows
    }

    /// Merged interior and boundary intervals at height `y`, sorted.
    pub fn intervals_at(&self, y: i64) -> Result<Vec<Interval>, ScanlineError> {
        self.intervals_at_doubled(2 * y)
    }

    fn intervals_at_doubled(&self, doubled_y: i64) -> Result<Vec<Interval>, ScanlineError> {
        let crossings: Vec<i64> = self
            .vertical
            .iter()
            .filter(|e| 2 * e.y_min <= doubled_y && doubled_y < 2 * e.y_max)
            .map(|e| e.x)
            .sorted_unstable()
            .collect();
        if crossings.len() % 2 != 0 {
            return Err(ScanlineError::OddCrossings {
                doubled_y,
                count: crossings.len(),
            });
        }

        let interior = crossings
            .chunks_exact(2)
            .map(|pair| Interval::new(pair[0], pair[1]));
        let boundary = self
            .horizontal
            .iter()
            .filter(|e| 2 * e.y == doubled_y)
            .map(|e| Interval::new(e.x_min, e.x_max));

        Ok(merge(interior.chain(boundary).collect()))
    }
}

/// Coalesce intervals that overlap or share an endpoint.
fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_unstable_by_key(|i| (i.start, i.end));
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.start <= last.end => last.end = last.end.max(interval.end),
            _ => merged.push(interval),
        }
    }
    merged
}

/// Intervals of a [`Polygon`] precomputed for every vertex row and every
/// band between consecutive rows, so containment queries never fail.
///
/// ```
/// use aoc2025_solutions::utils::scanline::{ContainmentIndex, Point2, Polygon};
///
/// let square = [(0, 0), (4, 0), (4, 4), (0, 4)].map(|(x, y)| Point2::new(x, y));
/// let index = ContainmentIndex::new(&Polygon::new(&square)?)?;
/// assert!(index.contains_rect(0, 4, 0, 4));
/// assert!(!index.contains_rect(0, 5, 0, 4));
/// # Ok::<(), aoc2025_solutions::utils::scanline::ScanlineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContainmentIndex {
    rows: Vec<i64>,
    at_row: Vec<Vec<Interval>>,
    /// `in_band[i]` holds strictly between `rows[i]` and `rows[i + 1]`
    in_band: Vec<Vec<Interval>>,
}

impl ContainmentIndex {
    pub fn new(polygon: &Polygon) -> Result<Self, ScanlineError> {
        let rows = polygon.rows().to_vec();
        let at_row = rows
            .iter()
            .map(|&y| polygon.intervals_at_doubled(2 * y))
            .collect::<Result<_, _>>()?;
        let in_band = rows
            .iter()
            .tuple_windows()
            .map(|(&lo, &hi)| polygon.intervals_at_doubled(lo + hi))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            rows,
            at_row,
            in_band,
        })
    }

    /// Intervals at any height `y`.
    pub fn intervals_at(&self, y: i64) -> &[Interval] {
        match self.rows.binary_search(&y) {
            Ok(row) => &self.at_row[row],
            Err(0) => &[],
            Err(above) if above == self.rows.len() => &[],
            Err(above) => &self.in_band[above - 1],
        }
    }

    fn covers(intervals: &[Interval], x_min: i64, x_max: i64) -> bool {
        intervals.iter().any(|i| i.covers(x_min, x_max))
    }

    /// Whether `[x_min, x_max] × [y_min, y_max]` lies inside the polygon or
    /// on its boundary.
    ///
    /// The bottom and top rows are checked, then every band the rectangle
    /// reaches into. A vertex row strictly inside the rectangle needs no
    /// check of its own: it crosses the same vertical edges as the band
    /// above it and only adds boundary intervals.
    pub fn contains_rect(&self, x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> bool {
        if !Self::covers(self.intervals_at(y_min), x_min, x_max)
            || !Self::covers(self.intervals_at(y_max), x_min, x_max)
        {
            return false;
        }

        let first = self.rows.partition_point(|&y| y <= y_min).saturating_sub(1);
        let last = self
            .rows
            .partition_point(|&y| y < y_max)
            .min(self.in_band.len());
        self.in_band
            .get(first..last)
            .unwrap_or_default()
            .iter()
            .all(|band| Self::covers(band, x_min, x_max))
    }
}
