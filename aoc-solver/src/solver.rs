//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data shared by every part.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct ExpenseReport;
///
/// impl AocParser for ExpenseReport {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(ExpenseReport::parse("1721\n979").unwrap(), vec![1721, 979]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything the parts want to cache between them.
    ///
    /// Owned data (`Vec<T>`, structs) is the common case; borrow from the
    /// input with `&'a str` when no transformation is needed.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// The const generic keeps each part in its own impl block; the
/// `AocSolver` derive wires the impls into [`Solver::solve_part`].
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime entry point for a puzzle: how many parts it has and how to
/// dispatch a part number.
///
/// Usually derived:
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Seats;
///
/// impl AocParser for Seats {
///     type SharedData<'a> = Vec<u16>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Seats {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
///     }
/// }
///
/// impl PartSolver<2> for Seats {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// let mut shared = Seats::parse("5 9 3").unwrap();
/// assert_eq!(Seats::solve_part(&mut shared, 1).unwrap(), "9");
/// assert_eq!(Seats::solve_part(&mut shared, 2).unwrap(), "3");
/// assert!(matches!(Seats::solve_part(&mut shared, 3), Err(SolveError::PartNotImplemented(3))));
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects `part == 0` and `part > PARTS`
    /// with [`SolveError::PartOutOfRange`] before dispatching.
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
