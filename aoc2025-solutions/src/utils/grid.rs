//! Rectangular byte grids

use anyhow::{anyhow, bail};

/// Row-major grid of ASCII cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

const NEIGHBOURS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Grid {
    /// Parse non-empty lines of equal width; `allowed` lists the legal cells.
    pub fn parse(input: &str, allowed: &[u8]) -> anyhow::Result<Self> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;

        for (idx, line) in input.lines().enumerate() {
            let row = line.trim_end().as_bytes();
            if row.is_empty() {
                continue;
            }
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    bail!("(line {}) width {} differs from {}", idx + 1, row.len(), w)
                }
                Some(_) => {}
            }
            if let Some(pos) = row.iter().position(|b| !allowed.contains(b)) {
                bail!(
                    "(line {}) unexpected {:?} at column {}",
                    idx + 1,
                    row[pos] as char,
                    pos + 1
                );
            }
            cells.extend_from_slice(row);
            height += 1;
        }

        let width = width.ok_or_else(|| anyhow!("empty grid"))?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[y * self.width + x] = value;
    }

    /// Row `y` as a byte slice.
    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Coordinates of every cell equal to `value`, row by row.
    pub fn positions(&self, value: u8) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == value)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    /// In-bounds king-move neighbours of `(x, y)`.
    pub fn neighbours8(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOURS_8.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < self.width && ny < self.height).then_some((nx, ny))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_have_three_neighbours() {
        let grid = Grid::parse("...\n...\n...", b".").unwrap();
        assert_eq!(grid.neighbours8(0, 0).count(), 3);
        assert_eq!(grid.neighbours8(1, 1).count(), 8);
        assert_eq!(grid.neighbours8(2, 1).count(), 5);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Grid::parse("...\n..", b".").is_err());
        assert!(Grid::parse("..#", b".").is_err());
        assert!(Grid::parse("\n\n", b".").is_err());
    }
}
