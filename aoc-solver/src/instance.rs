//! Parsed puzzle inputs that answer parts on demand
//!
//! Parsing happens once per input; every part afterwards runs against the
//! same [`AocParser::SharedData`](crate::AocParser::SharedData). Both steps
//! are bracketed by UTC timestamps so the runner can report them apart.

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Run `f` and return its value with the UTC window it ran in.
fn measure<T>(f: impl FnOnce() -> T) -> (T, DateTime<Utc>, DateTime<Utc>) {
    let start = Utc::now();
    let value = f();
    (value, start, Utc::now())
}

/// Answer for one part together with when it was computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// Part the answer belongs to
    pub part: u8,
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A puzzle input parsed by `S`, ready to answer any of its parts.
///
/// Parts run in whatever order they are requested, so a later part may
/// reuse what an earlier one cached in the shared data.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` for `year`/`day`.
    ///
    /// # Arguments
    /// * `year`, `day` - Identify the puzzle; only reported back, never checked
    /// * `input` - Raw puzzle text, borrowed for as long as the instance lives
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Parsed, with the parse window recorded
    /// * `Err(ParseError)` - Whatever `S::parse` rejected
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_start, parse_end) = measure(|| S::parse(input));

        Ok(Self {
            year,
            day,
            shared: shared?,
            parse_start,
            parse_end,
        })
    }

    /// Parsed input, including anything earlier parts cached in it
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Object-safe view over any [`SolverInstance`], as handed out by the
/// registry.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("{}/{:02} part {}: {}", solver.year(), solver.day(), result.part, result.answer);
///     }
///     println!("parsed in {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve one part and time it.
    ///
    /// # Arguments
    /// * `part` - Counted from 1; anything outside `1..=parts()` is rejected
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The answer and its solve window
    /// * `Err(SolveError::PartOutOfRange)` - `part` is not one of the solver's parts
    /// * `Err(SolveError)` - The part itself failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts, counted from 1
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, solve_start, solve_end) =
            measure(|| S::solve_part_checked_range(&mut self.shared, part));

        Ok(SolveResult {
            part,
            answer: answer?,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AocParser;

    /// Words of the input; part 1 counts them and remembers the count,
    /// part 2 reports how many times part 1 has run.
    struct Words;

    struct Tally<'a> {
        words: Vec<&'a str>,
        part1_runs: u32,
    }

    impl AocParser for Words {
        type SharedData<'a> = Tally<'a>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("no words".into()));
            }
            Ok(Tally {
                words: input.split_whitespace().collect(),
                part1_runs: 0,
            })
        }
    }

    impl Solver for Words {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Tally<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => {
                    shared.part1_runs += 1;
                    Ok(shared.words.len().to_string())
                }
                2 => Ok(shared.part1_runs.to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn parts_share_parsed_data() {
        let mut instance = SolverInstance::<Words>::new(2025, 3, "a bb ccc").unwrap();
        assert_eq!(instance.shared().words, vec!["a", "bb", "ccc"]);

        let first = instance.solve(1).unwrap();
        assert_eq!((first.part, first.answer.as_str()), (1, "3"));
        instance.solve(1).unwrap();
        assert_eq!(instance.solve(2).unwrap().answer, "2");
        assert_eq!(instance.shared().part1_runs, 2);
    }

    #[test]
    fn timing_windows_are_ordered() {
        let mut instance = SolverInstance::<Words>::new(2025, 3, "x").unwrap();
        let result = instance.solve(1).unwrap();
        assert!(instance.parse_duration() >= TimeDelta::zero());
        assert!(result.duration() >= TimeDelta::zero());
        assert!(instance.parse_end() <= result.solve_start);
    }

    #[test]
    fn dyn_view_reports_identity_and_bounds() {
        let mut solver: Box<dyn DynSolver> =
            Box::new(SolverInstance::<Words>::new(2025, 12, "x y").unwrap());
        assert_eq!((solver.year(), solver.day(), solver.parts()), (2025, 12, 2));
        assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn parse_errors_surface_from_new() {
        assert!(matches!(
            SolverInstance::<Words>::new(2025, 1, ""),
            Err(ParseError::MissingData(_))
        ));
    }
}
