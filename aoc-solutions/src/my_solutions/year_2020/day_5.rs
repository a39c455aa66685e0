//! Binary boarding: seat codes are binary search paths over a 128x8 cabin

use crate::utils::PuzzleError;
use crate::utils::input::parse_lines;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

const CODE_LEN: usize = 10;
const ROWS: u16 = 128;
const COLUMNS: u16 = 8;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 5, tags = ["2020", "binary"])]
pub struct Solver;

/// Ten symbols over `F`/`B` (row halving) and `L`/`R` (column halving)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatCode([u8; CODE_LEN]);

impl FromStr for SeatCode {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: [u8; CODE_LEN] = s.trim().as_bytes().try_into().map_err(|_| {
            PuzzleError::invalid_format(format!(
                "seat code must be {} symbols, got {:?}",
                CODE_LEN, s
            ))
        })?;
        if let Some(&bad) = code.iter().find(|b| !b"FBLR".contains(b)) {
            return Err(PuzzleError::invalid_format(format!(
                "unexpected symbol {:?} in seat code {:?}",
                bad as char, s
            )));
        }
        Ok(Self(code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub row: u16,
    pub column: u16,
}

impl Seat {
    /// Walk the code, keeping the lower (`F`, `L`) or upper (`B`, `R`) half
    /// of the live range. Reports the lower bound of each range, which is the
    /// collapsed value for codes with 7 row and 3 column symbols.
    pub fn locate(code: &SeatCode) -> Self {
        let (mut row_lo, mut row_hi) = (0, ROWS - 1);
        let (mut col_lo, mut col_hi) = (0, COLUMNS - 1);
        for &symbol in &code.0 {
            match symbol {
                b'F' => row_hi -= (row_hi - row_lo + 1) / 2,
                b'B' => row_lo += (row_hi - row_lo + 1) / 2,
                b'L' => col_hi -= (col_hi - col_lo + 1) / 2,
                _ => col_lo += (col_hi - col_lo + 1) / 2,
            }
        }
        Self {
            row: row_lo,
            column: col_lo,
        }
    }

    pub fn id(&self) -> SeatId {
        SeatId(self.row * COLUMNS + self.column)
    }
}

/// Row-major seat index, `row * 8 + column`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId(pub u16);

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn decode(code: &SeatCode) -> SeatId {
    Seat::locate(code).id()
}

/// The missing id between the lowest and highest ids of the manifest
///
/// Fails with `NotFound` when the manifest has fewer than two seats or no
/// hole between them.
pub fn find_gap(manifest: &[SeatId]) -> Result<SeatId, PuzzleError> {
    let mut sorted = manifest.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    sorted
        .iter()
        .tuple_windows()
        .find(|(a, b)| b.0 != a.0 + 1)
        .map(|(a, _)| SeatId(a.0 + 1))
        .ok_or_else(|| {
            PuzzleError::not_found(format!("no gap among {} seat ids", sorted.len()))
        })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<SeatId>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(parse_lines(input, |line| {
            let code: SeatCode = line.parse()?;
            Ok(decode(&code))
        })?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let highest = shared
            .iter()
            .max()
            .ok_or_else(|| PuzzleError::not_found("no boarding passes"))?;
        Ok(highest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(find_gap(shared)?.to_string())
    }
}
