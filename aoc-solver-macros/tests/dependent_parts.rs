use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

/// Part 1 sorts once and caches the sorted ids, part 2 reuses them
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SortedIds;

#[derive(Debug)]
struct SharedData {
    ids: Vec<u16>,
    sorted: Option<Vec<u16>>,
}

impl AocParser for SortedIds {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let ids = input
            .split_whitespace()
            .map(|token| {
                token
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SharedData { ids, sorted: None })
    }
}

fn sorted(shared: &mut SharedData) -> &[u16] {
    shared.sorted.get_or_insert_with(|| {
        let mut ids = shared.ids.clone();
        ids.sort_unstable();
        ids
    })
}

impl PartSolver<1> for SortedIds {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sorted(shared)
            .last()
            .map(u16::to_string)
            .ok_or_else(|| SolveError::SolveFailed("no ids".into()))
    }
}

impl PartSolver<2> for SortedIds {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sorted(shared)
            .first()
            .map(u16::to_string)
            .ok_or_else(|| SolveError::SolveFailed("no ids".into()))
    }
}

#[test]
fn test_part1_caches_sorted_ids() {
    let mut shared = SortedIds::parse("7 3 9 1").unwrap();
    assert!(shared.sorted.is_none());

    assert_eq!(SortedIds::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(shared.sorted.as_deref(), Some(&[1, 3, 7, 9][..]));
}

#[test]
fn test_part2_reuses_cache() {
    let mut shared = SortedIds::parse("7 3 9 1").unwrap();
    SortedIds::solve_part(&mut shared, 1).unwrap();

    // Tamper with the raw ids: part 2 must read the cached order
    shared.ids.clear();
    assert_eq!(SortedIds::solve_part(&mut shared, 2).unwrap(), "1");
}

#[test]
fn test_parts_run_in_any_order() {
    let mut shared = SortedIds::parse("4 2").unwrap();
    assert_eq!(SortedIds::solve_part(&mut shared, 2).unwrap(), "2");
    assert_eq!(SortedIds::solve_part(&mut shared, 1).unwrap(), "4");
}

#[test]
fn test_solve_failed_on_empty_input() {
    let mut shared = SortedIds::parse("").unwrap();
    assert!(matches!(
        SortedIds::solve_part(&mut shared, 1),
        Err(SolveError::SolveFailed(_))
    ));
}
