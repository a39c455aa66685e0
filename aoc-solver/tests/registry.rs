//! Registry and instance behaviour through the public API

use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, RegistrationError, SolveError, SolverError,
    SolverRegistryBuilder, register_solver,
};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct CountLines;

impl AocParser for CountLines {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("empty input".into()));
        }
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for CountLines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for CountLines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|l| l.len())
            .max()
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no lines".into()))
    }
}

#[test]
fn test_create_and_solve() {
    let mut builder = SolverRegistryBuilder::new();
    register_solver!(builder, CountLines, 2020, 3);
    let registry = builder.build();

    let mut solver = registry.create_solver(2020, 3, "ab\nabcd\na").unwrap();
    assert_eq!(solver.year(), 2020);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let part1 = solver.solve(1).unwrap();
    assert_eq!(part1.answer, "3");
    assert!(part1.duration() >= chrono::TimeDelta::zero());
    assert_eq!(solver.solve(2).unwrap().answer, "4");
}

#[test]
fn test_out_of_range_part_through_instance() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<CountLines>(2020, 3)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2020, 3, "x").unwrap();
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register_solver::<CountLines>(2020, 3)
        .unwrap()
        .register_solver::<CountLines>(2020, 3);

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2020, 3))
    ));
}

#[test]
fn test_invalid_year_day_rejected() {
    let result = SolverRegistryBuilder::new().register_solver::<CountLines>(2020, 26);
    assert!(matches!(
        result,
        Err(RegistrationError::InvalidYearDay(2020, 26))
    ));
}

#[test]
fn test_parse_error_surfaces() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<CountLines>(2020, 3)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2020, 3, ""),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_iter_info_is_ordered() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<CountLines>(2021, 1)
        .unwrap()
        .register_solver::<CountLines>(2020, 6)
        .unwrap()
        .register_solver::<CountLines>(2020, 2)
        .unwrap()
        .build();

    let keys: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(keys, vec![(2020, 2), (2020, 6), (2021, 1)]);
    assert_eq!(registry.len(), 3);
}
