//! Error types shared by every solver

use thiserror::Error;

/// Failure to turn raw puzzle text into a solver's shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A line or block does not match the expected layout
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A section the puzzle requires is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Failure while computing the answer for one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares this part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part lies outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The puzzle input was well-formed but has no answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error raised by a solver body.
    pub fn failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::SolveFailed(err.into())
    }
}

/// Errors from looking up and running a registered solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Errors raised while building a registry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two solvers claim the same year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
}
