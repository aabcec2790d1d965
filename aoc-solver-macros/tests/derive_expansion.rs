use aoc_solver::{
    AocParser, ParseError, PartSolver, RegisterableSolver, RegistryBuilder, SolveError, Solver,
};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Sums and multiplies comma-separated integers
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2033, day = 7, tags = ["macro-test", "arith"])]
struct Arith;

impl AocParser for Arith {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split(',')
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not an integer: {:?}", s)))
            })
            .collect()
    }
}

impl PartSolver<1> for Arith {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Arith {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .try_fold(1i64, |acc, &x| acc.checked_mul(x))
            .map(|p| p.to_string())
            .ok_or_else(|| SolveError::failed("product overflows i64"))
    }
}

/// Registered without tags
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2033, day = 8)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = ();

    fn parse<'a>(_input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("ok".into())
    }
}

#[test]
fn derived_solver_dispatches_each_part() {
    let mut shared = Arith::parse("2, 3, 4").unwrap();
    assert_eq!(Arith::PARTS, 2);
    assert_eq!(Arith::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(Arith::solve_part(&mut shared, 2).unwrap(), "24");
    assert!(matches!(
        Arith::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
}

#[test]
fn part_errors_pass_through_dispatch() {
    let mut shared = Arith::parse("9223372036854775807,2").unwrap();
    assert!(matches!(
        Arith::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn plugins_carry_their_tags() {
    let plugins: Vec<_> = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .filter(|p| p.year == 2033)
        .map(|p| (p.day, p.tags, p.solver.parts()))
        .collect();

    assert!(plugins.contains(&(7, &["macro-test", "arith"][..], 2)));
    assert!(plugins.contains(&(8, &[][..], 1)));
}

#[test]
fn tag_filter_selects_registered_solver() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"arith"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2033, 7));
    assert!(!registry.storage().contains(2033, 8));

    let mut solver = registry.create_solver(2033, 7, "5,5").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "10");
    assert_eq!(solver.solve(2).unwrap().answer, "25");
}
