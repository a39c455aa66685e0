//! Property tests for `#[derive(AocSolver)]` dispatch

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Seat ids, one per line; part 1 the highest, part 2 how many
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Manifest;

impl AocParser for Manifest {
    type SharedData<'a> = Vec<u16>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("seat id {:?}", line)))
            })
            .collect()
    }
}

impl PartSolver<1> for Manifest {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(u16::to_string)
            .ok_or_else(|| SolveError::failed("empty manifest"))
    }
}

impl PartSolver<2> for Manifest {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

fn manifest_input(ids: &[u16]) -> String {
    ids.iter().map(u16::to_string).collect::<Vec<_>>().join("\n")
}

#[test]
fn test_parts_constant_follows_attribute() {
    assert_eq!(<Manifest as Solver>::PARTS, 2);
}

#[test]
fn test_solve_failure_passes_through() {
    let mut shared = Vec::new();
    assert!(matches!(
        Manifest::solve_part(&mut shared, 1),
        Err(SolveError::SolveFailed(_))
    ));
}

proptest! {
    #[test]
    fn prop_dispatch_matches_direct_call(
        ids in prop::collection::vec(0u16..1024, 1..20),
        part in 1u8..=2,
    ) {
        let input = manifest_input(&ids);
        let mut via_dispatch = Manifest::parse(&input).unwrap();
        let mut direct = Manifest::parse(&input).unwrap();

        let expected = match part {
            1 => <Manifest as PartSolver<1>>::solve(&mut direct),
            _ => <Manifest as PartSolver<2>>::solve(&mut direct),
        };
        prop_assert_eq!(
            Manifest::solve_part(&mut via_dispatch, part).unwrap(),
            expected.unwrap()
        );
    }

    #[test]
    fn prop_unknown_part_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = vec![1, 2, 3];
        match Manifest::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "part {} gave {:?}", part, other),
        }
    }

    #[test]
    fn prop_checked_range_rejects_before_dispatch(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = vec![1, 2, 3];
        match Manifest::solve_part_checked_range(&mut shared, part) {
            Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "part {} gave {:?}", part, other),
        }
    }
}
