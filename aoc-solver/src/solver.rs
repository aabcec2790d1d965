//! Parser and part-solver traits
//!
//! A puzzle is split into one parse step and one or more parts. Parsing
//! produces a `SharedData` value that every part receives mutably, so a
//! part can stash intermediate results for the parts after it.

use crate::error::{ParseError, SolveError};

/// Parse step of a puzzle.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .enumerate()
///             .map(|(i, l)| {
///                 l.parse()
///                     .map_err(|_| ParseError::InvalidFormat(format!("line {}: {:?}", i + 1, l)))
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("3\n7").unwrap(), vec![3, 7]);
/// ```
pub trait AocParser {
    /// Parsed input plus whatever the parts want to cache between them.
    ///
    /// The lifetime lets a solver keep `&'a str` slices of the raw input
    /// instead of copying them.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// One part of a puzzle, selected at compile time by `N`.
///
/// Implement this once per part and let `#[derive(AocSolver)]` generate the
/// runtime dispatch in [`Solver::solve_part`].
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver with runtime part dispatch.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Depths {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string()),
///             2 => Ok(shared.iter().max().copied().unwrap_or_default().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Depths::parse("1\n5\n2\n9").unwrap();
/// assert_eq!(Depths::solve_part(&mut shared, 1).unwrap(), "2");
/// ```
pub trait Solver: AocParser {
    /// Number of parts, counted from 1
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds-checked entry point used by the registry and the test harness.
pub trait SolverExt: Solver {
    /// Rejects parts outside `1..=PARTS` before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
