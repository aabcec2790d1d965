//! Puzzle inputs read from a local directory

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Read-only view over a directory of puzzle inputs
///
/// Directory structure: `{root}/{year}/day{day:02}.txt`, with examples next
/// to them as `day{day:02}.example.txt`.
pub struct InputStore {
    root: PathBuf,
    example: bool,
}

impl InputStore {
    pub fn new(root: PathBuf, example: bool) -> Self {
        Self { root, example }
    }

    /// Path the input for a specific year/day is read from
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        let suffix = if self.example { ".example" } else { "" };
        self.root
            .join(year.to_string())
            .join(format!("day{:02}{}.txt", day, suffix))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing(path),
            _ => InputError::Read { path, source },
        })
    }
}
