//! Property tests for part dispatch, range checking and plugin discovery

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, DynSolver, ParseError, PartSolver, RegistryBuilder,
    SolveError, Solver, SolverExt,
};
use proptest::prelude::*;

/// Words per line, with part 2 reusing the totals part 1 cached
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2034, day = 25, tags = ["framework-test"])]
struct WordCount;

struct Words<'a> {
    lines: Vec<&'a str>,
    totals: Option<Vec<usize>>,
}

impl AocParser for WordCount {
    type SharedData<'a> = Words<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("no lines".into()));
        }
        Ok(Words {
            lines: input.lines().collect(),
            totals: None,
        })
    }
}

fn totals<'s>(shared: &'s mut Words<'_>) -> &'s [usize] {
    let lines = &shared.lines;
    shared
        .totals
        .get_or_insert_with(|| lines.iter().map(|l| l.split_whitespace().count()).collect())
}

impl PartSolver<1> for WordCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(totals(shared).iter().sum::<usize>().to_string())
    }
}

impl PartSolver<2> for WordCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        totals(shared)
            .iter()
            .max()
            .map(ToString::to_string)
            .ok_or_else(|| SolveError::failed("no lines"))
    }
}

/// Declares three parts but only implements the first
#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Unfinished;

impl AocParser for Unfinished {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Unfinished {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Unfinished {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Err(SolveError::PartNotImplemented(2))
    }
}

impl PartSolver<3> for Unfinished {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Err(SolveError::PartNotImplemented(3))
    }
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::collection::vec("[a-z]{1,6}", 1..6), 1..6).prop_map(|lines| {
        lines
            .iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// *For any* part in `1..=PARTS`, `solve_part` gives what the matching
    /// `PartSolver<N>` gives.
    #[test]
    fn solve_part_dispatches_to_part_solver(input in sentence(), part in 1u8..=2) {
        let mut via_dispatch = WordCount::parse(&input).unwrap();
        let mut direct = WordCount::parse(&input).unwrap();

        let dispatched = WordCount::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <WordCount as PartSolver<1>>::solve(&mut direct),
            _ => <WordCount as PartSolver<2>>::solve(&mut direct),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    /// *For any* part outside `1..=PARTS`, the generated dispatch reports
    /// `PartNotImplemented` and the checked entry point `PartOutOfRange`.
    #[test]
    fn parts_outside_range_are_rejected(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = WordCount::parse("a b").unwrap();

        match WordCount::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
        match WordCount::solve_part_checked_range(&mut shared, part) {
            Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
        }
    }

    /// *For any* input, part 2 sees the totals part 1 cached in the shared data.
    #[test]
    fn shared_data_carries_between_parts(input in sentence()) {
        let mut shared = WordCount::parse(&input).unwrap();
        let sum = WordCount::solve_part(&mut shared, 1).unwrap();
        prop_assert!(shared.totals.is_some());

        let cached = shared.totals.clone().unwrap();
        prop_assert_eq!(sum, cached.iter().sum::<usize>().to_string());
        let max = WordCount::solve_part(&mut shared, 2).unwrap();
        prop_assert_eq!(max, cached.iter().max().unwrap().to_string());
    }
}

#[test]
fn derived_parts_constant_matches_attribute() {
    assert_eq!(<WordCount as Solver>::PARTS, 2);
    assert_eq!(<Unfinished as Solver>::PARTS, 3);
}

#[test]
fn declared_but_unimplemented_part_passes_range_check() {
    let mut shared = Unfinished::parse("abc").unwrap();
    assert_eq!(Unfinished::solve_part_checked_range(&mut shared, 1).unwrap(), "3");
    assert!(matches!(
        Unfinished::solve_part_checked_range(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
    assert!(matches!(
        Unfinished::solve_part_checked_range(&mut shared, 4),
        Err(SolveError::PartOutOfRange(4))
    ));
}

#[test]
fn auto_registered_plugin_is_discoverable_by_tag() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"framework-test"))
        .unwrap()
        .build();

    let info = registry.storage().get_info(2034, 25).unwrap();
    assert_eq!(info.parts, 2);
    assert_eq!(registry.storage().len(), 1);

    let mut solver: Box<dyn DynSolver> = registry
        .create_solver(2034, 25, "one two\nthree")
        .unwrap();
    assert_eq!((solver.year(), solver.day(), solver.parts()), (2034, 25, 2));
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "2");
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}
