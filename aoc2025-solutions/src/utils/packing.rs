//! Exact packing of polyomino pieces into rectangular regions
//!
//! [`ShapeCatalog::fits`] answers in three tiers: an area bound that rejects,
//! a block layout that accepts when every piece gets its own bounding box,
//! and an exact backtracking search over occupancy bitmasks.

use bitvec::prelude::*;
use std::cmp::Reverse;
use std::collections::HashSet;
use thiserror::Error;

type Cell = (i32, i32);
type Mask = BitVec<u64, Lsb0>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("shape {0} has no cells")]
    Empty(usize),
}

/// One orientation, normalized to the origin with cells sorted by `(y, x)`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variant {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Variant {
    fn normalized(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut cells: Vec<Cell> = cells.into_iter().collect();
        let min_x = cells.iter().map(|c| c.0).min().unwrap_or(0);
        let min_y = cells.iter().map(|c| c.1).min().unwrap_or(0);
        for c in cells.iter_mut() {
            *c = (c.0 - min_x, c.1 - min_y);
        }
        cells.sort_unstable_by_key(|&(x, y)| (y, x));
        cells.dedup();

        let width = cells.iter().map(|c| c.0 + 1).max().unwrap_or(0) as usize;
        let height = cells.iter().map(|c| c.1 + 1).max().unwrap_or(0) as usize;
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

#[derive(Debug, Clone)]
pub struct Shape {
    id: usize,
    area: usize,
    variants: Vec<Variant>,
    max_width: usize,
    max_height: usize,
}

impl Shape {
    /// Shape from its `(x, y)` cells; every rotation and mirror image is
    /// derived, duplicates removed.
    pub fn new(
        id: usize,
        cells: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, ShapeError> {
        let base = Variant::normalized(cells.into_iter().map(|(x, y)| (x as i32, y as i32)));
        if base.cells.is_empty() {
            return Err(ShapeError::Empty(id));
        }

        let mut variants = Vec::with_capacity(8);
        let mut turned = base.cells.clone();
        for _ in 0..4 {
            variants.push(Variant::normalized(turned.iter().copied()));
            variants.push(Variant::normalized(turned.iter().map(|&(x, y)| (-x, y))));
            turned = turned.iter().map(|&(x, y)| (y, -x)).collect();
        }
        variants.sort();
        variants.dedup();

        Ok(Self {
            id,
            area: base.cells.len(),
            max_width: variants.iter().map(Variant::width).max().unwrap_or(0),
            max_height: variants.iter().map(Variant::height).max().unwrap_or(0),
            variants,
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn area(&self) -> usize {
        self.area
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}

/// Target rectangle and the number of pieces of each catalog shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub width: usize,
    pub height: usize,
    pub counts: Vec<usize>,
}

impl Region {
    pub fn new(width: usize, height: usize, counts: Vec<usize>) -> Self {
        Self {
            width,
            height,
            counts,
        }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Required pieces of shape `index`; shapes past the end need none.
    pub fn count(&self, index: usize) -> usize {
        self.counts.get(index).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
    block_width: usize,
    block_height: usize,
}

impl ShapeCatalog {
    pub fn new(shapes: Vec<Shape>) -> Self {
        let block_width = shapes.iter().map(|s| s.max_width).max().unwrap_or(0);
        let block_height = shapes.iter().map(|s| s.max_height).max().unwrap_or(0);
        Self {
            shapes,
            block_width,
            block_height,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Whether every required piece can be placed in `region` without
    /// overlap. A count for a shape the catalog lacks cannot be met.
    pub fn fits(&self, region: &Region) -> bool {
        if region.counts.iter().skip(self.shapes.len()).any(|&c| c > 0) {
            return false;
        }

        let pieces: usize = (0..self.shapes.len()).map(|i| region.count(i)).sum();
        if pieces == 0 {
            return true;
        }

        let required: usize = self
            .shapes
            .iter()
            .enumerate()
            .map(|(i, s)| s.area * region.count(i))
            .sum();
        if required > region.area() {
            return false;
        }

        let blocks = (region.width / self.block_width) * (region.height / self.block_height);
        if pieces <= blocks {
            return true;
        }

        self.search(region)
    }

    fn search(&self, region: &Region) -> bool {
        let placements: Vec<Vec<Placement>> = self
            .shapes
            .iter()
            .map(|s| Placement::enumerate(s, region.width, region.height))
            .collect();

        let mut pieces: Vec<usize> = Vec::new();
        for (i, shape_placements) in placements.iter().enumerate() {
            let count = region.count(i);
            if count > 0 && shape_placements.is_empty() {
                return false;
            }
            pieces.extend(std::iter::repeat_n(i, count));
        }
        pieces.sort_by_key(|&i| (placements[i].len(), Reverse(self.shapes[i].area), i));

        let mut remaining_area = vec![0; pieces.len() + 1];
        for k in (0..pieces.len()).rev() {
            remaining_area[k] = remaining_area[k + 1] + self.shapes[pieces[k]].area;
        }

        let mut search = Backtrack {
            region_area: region.area(),
            pieces: &pieces,
            remaining_area,
            placements: &placements,
            occupied: Mask::repeat(false, region.area()),
            filled: 0,
            dead_ends: HashSet::new(),
        };
        search.place(0, 0)
    }
}

/// A variant at a fixed offset in the region
#[derive(Debug, Clone)]
struct Placement {
    /// Lowest cell index covered
    min_cell: usize,
    mask: Mask,
}

impl Placement {
    /// Every in-bounds placement of `shape`, ordered by lowest cell.
    fn enumerate(shape: &Shape, width: usize, height: usize) -> Vec<Placement> {
        let mut placements = Vec::new();
        for variant in &shape.variants {
            if variant.width > width || variant.height > height {
                continue;
            }
            for oy in 0..=height - variant.height {
                for ox in 0..=width - variant.width {
                    let mut mask = Mask::repeat(false, width * height);
                    let mut min_cell = usize::MAX;
                    for &(x, y) in &variant.cells {
                        let cell = (oy + y as usize) * width + ox + x as usize;
                        mask.set(cell, true);
                        min_cell = min_cell.min(cell);
                    }
                    placements.push(Placement { min_cell, mask });
                }
            }
        }
        placements.sort_by_key(|p| p.min_cell);
        placements
    }
}

struct Backtrack<'a> {
    region_area: usize,
    /// Shape index of each piece, in placement order
    pieces: &'a [usize],
    /// `remaining_area[k]`: total area of `pieces[k..]`
    remaining_area: Vec<usize>,
    placements: &'a [Vec<Placement>],
    occupied: Mask,
    filled: usize,
    /// `(occupancy, next piece, lowest allowed cell)` states known to fail
    dead_ends: HashSet<(Vec<u64>, usize, usize)>,
}

impl Backtrack<'_> {
    /// Place `pieces[idx..]`; `floor` is the lowest cell the next piece may
    /// start at, nonzero only when it repeats the previous piece's shape.
    fn place(&mut self, idx: usize, floor: usize) -> bool {
        if idx == self.pieces.len() {
            return true;
        }
        if self.region_area - self.filled < self.remaining_area[idx] {
            return false;
        }

        let key = (self.occupied.as_raw_slice().to_vec(), idx, floor);
        if self.dead_ends.contains(&key) {
            return false;
        }

        let shape = self.pieces[idx];
        let placements = self.placements;
        let candidates = &placements[shape];
        let start = candidates.partition_point(|p| p.min_cell < floor);
        let area = candidates.first().map_or(0, |p| p.mask.count_ones());

        for placement in &candidates[start..] {
            if self.overlaps(&placement.mask) {
                continue;
            }

            self.toggle(&placement.mask, true);
            self.filled += area;
            let next_floor = match self.pieces.get(idx + 1) {
                Some(&next) if next == shape => placement.min_cell,
                _ => 0,
            };
            if self.place(idx + 1, next_floor) {
                return true;
            }
            self.filled -= area;
            self.toggle(&placement.mask, false);
        }

        self.dead_ends.insert(key);
        false
    }

    fn overlaps(&self, mask: &Mask) -> bool {
        self.occupied
            .as_raw_slice()
            .iter()
            .zip(mask.as_raw_slice())
            .any(|(a, b)| a & b != 0)
    }

    fn toggle(&mut self, mask: &Mask, on: bool) {
        for (a, &b) in self
            .occupied
            .as_raw_mut_slice()
            .iter_mut()
            .zip(mask.as_raw_slice())
        {
            if on {
                *a |= b;
            } else {
                *a &= !b;
            }
        }
    }
}
