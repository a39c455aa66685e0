use crate::utils::input::parse_ints;
use crate::utils::PuzzleError;
use crate::utils::pair_sum::{find_complement_pair, find_complement_triple};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const TARGET_SUM: i64 = 2020;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 1, tags = ["2020", "search"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(parse_ints(input)?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (a, b) = find_complement_pair(shared, TARGET_SUM)?;
        Ok(checked_product(&[a, b])?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (a, b, c) = find_complement_triple(shared, TARGET_SUM)?;
        Ok(checked_product(&[a, b, c])?.to_string())
    }
}

fn checked_product(factors: &[i64]) -> Result<i64, PuzzleError> {
    factors
        .iter()
        .try_fold(1i64, |acc, &n| acc.checked_mul(n))
        .ok_or_else(|| PuzzleError::invalid_format(format!("product of {:?} overflows i64", factors)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "514579");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "241861950");
    }

    #[test]
    fn test_no_pair() {
        let mut shared = Solver::parse("1\n2\n3").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_product_overflow_is_an_error() {
        let mut shared = Solver::parse("4000000000\n-3999997980\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));

        let mut shared = Solver::parse("4000000000\n4000000000\n-7999997980\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_checked_product() {
        assert_eq!(checked_product(&[1721, 299]).unwrap(), 514579);
        assert_eq!(checked_product(&[-2, 3, 7]).unwrap(), -42);
        assert!(checked_product(&[i64::MAX, 2]).is_err());
    }

    #[test]
    fn test_bad_line() {
        assert!(matches!(
            Solver::parse("1721\nabc\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
