//! Literal-case test harness
//!
//! Feeds `(part, input, expected)` triples to a [`Solver`] and compares the
//! answer string for exact equality. Inputs are `trim_end`-ed first, so
//! test literals can keep a trailing newline.

use crate::error::SolverError;
use crate::solver::{Solver, SolverExt};
use chrono::{TimeDelta, Utc};
use std::fmt;

/// One expected answer for one part of one input
#[derive(Debug, Clone)]
pub struct TestCase<'a> {
    pub name: &'a str,
    pub part: u8,
    pub input: &'a str,
    pub expected: String,
}

impl<'a> TestCase<'a> {
    pub fn new(name: &'a str, part: u8, input: &'a str, expected: impl ToString) -> Self {
        Self {
            name,
            part,
            input,
            expected: expected.to_string(),
        }
    }
}

/// What happened when a [`TestCase`] ran
#[derive(Debug)]
pub struct CaseOutcome {
    pub name: String,
    pub part: u8,
    pub expected: String,
    pub actual: Result<String, SolverError>,
    /// Parse plus solve time
    pub elapsed: TimeDelta,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(&self.actual, Ok(answer) if *answer == self.expected)
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed() { "PASS" } else { "FAIL" };
        write!(f, "[{}] part {} {}", status, self.part, self.name)?;
        match &self.actual {
            Ok(answer) if self.passed() => write!(f, " = {}", answer),
            Ok(answer) => write!(f, ": expected {}, got {}", self.expected, answer),
            Err(e) => write!(f, ": expected {}, got error: {}", self.expected, e),
        }
    }
}

/// Run a single case against `S`.
pub fn run_case<S: Solver>(case: &TestCase<'_>) -> CaseOutcome {
    let start = Utc::now();
    let actual = S::parse(case.input.trim_end())
        .map_err(SolverError::from)
        .and_then(|mut shared| {
            S::solve_part_checked_range(&mut shared, case.part).map_err(SolverError::from)
        });
    let elapsed = Utc::now() - start;

    CaseOutcome {
        name: case.name.to_string(),
        part: case.part,
        expected: case.expected.clone(),
        actual,
        elapsed,
    }
}

/// Outcomes of a batch of cases, in input order
#[derive(Debug)]
pub struct HarnessReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl HarnessReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for HarnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

pub fn run_cases<S: Solver>(cases: &[TestCase<'_>]) -> HarnessReport {
    HarnessReport {
        outcomes: cases.iter().map(run_case::<S>).collect(),
    }
}

/// Run every case and panic with the full report if any of them fails.
#[track_caller]
pub fn assert_cases<S: Solver>(cases: &[TestCase<'_>]) {
    let report = run_cases::<S>(cases);
    assert!(report.all_passed(), "\n{}", report);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, SolveError};
    use crate::solver::AocParser;

    struct Sum;

    impl AocParser for Sum {
        type SharedData<'a> = Vec<i64>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            input
                .lines()
                .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
                .collect()
        }
    }

    impl Solver for Sum {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
            Ok(shared.iter().sum::<i64>().to_string())
        }
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let outcome = run_case::<Sum>(&TestCase::new("sum", 1, "1\n2\n3\n\n", 6));
        assert!(outcome.passed(), "{}", outcome);
    }

    #[test]
    fn mismatches_and_errors_fail() {
        let report = run_cases::<Sum>(&[
            TestCase::new("ok", 1, "4", 4),
            TestCase::new("wrong", 1, "4", 5),
            TestCase::new("bad input", 1, "x", 0),
            TestCase::new("no part 2", 2, "4", 4),
        ]);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 3);
        assert!(matches!(
            report.outcomes[3].actual,
            Err(SolverError::SolveError(SolveError::PartOutOfRange(2)))
        ));
        assert!(report.to_string().ends_with("1 passed, 3 failed"));
    }

    #[test]
    #[should_panic(expected = "expected 7, got 6")]
    fn assert_cases_reports_failures() {
        assert_cases::<Sum>(&[TestCase::new("off by one", 1, "3\n3", 7)]);
    }
}
