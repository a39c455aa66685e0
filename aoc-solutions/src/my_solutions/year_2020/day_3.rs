use crate::utils::input::lines;
use crate::utils::PuzzleError;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 3, tags = ["2020", "grid"])]
pub struct Solver;

/// Slope as (right, down)
const PART1_SLOPE: (usize, usize) = (3, 1);
const PART2_SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

/// Tree map; the pattern repeats to the right indefinitely
#[derive(Debug)]
pub struct Forest {
    width: usize,
    trees: Vec<Vec<bool>>,
}

impl Forest {
    fn parse(input: &str) -> Result<Self, PuzzleError> {
        let mut width = None;
        let trees = lines(input)
            .enumerate()
            .map(|(idx, line)| {
                let row = line
                    .trim()
                    .chars()
                    .map(|c| match c {
                        '#' => Ok(true),
                        '.' => Ok(false),
                        other => Err(PuzzleError::invalid_format(format!(
                            "(line {}) unexpected map symbol {:?}",
                            idx + 1,
                            other
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                match *width.get_or_insert(row.len()) {
                    0 => Err(PuzzleError::invalid_format(format!(
                        "(line {}) empty map row",
                        idx + 1
                    ))),
                    w if w != row.len() => Err(PuzzleError::invalid_format(format!(
                        "(line {}) row width {} differs from {}",
                        idx + 1,
                        row.len(),
                        w
                    ))),
                    _ => Ok(row),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width: width.unwrap_or(0),
            trees,
        })
    }

    /// Trees hit going from the top-left corner down to the bottom row.
    /// The starting square is not counted.
    fn trees_on_slope(&self, (right, down): (usize, usize)) -> usize {
        self.trees
            .iter()
            .step_by(down.max(1))
            .enumerate()
            .skip(1)
            .filter(|(step, row)| row[(step * right) % self.width])
            .count()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Forest;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let forest = Forest::parse(input)?;
        if forest.trees.is_empty() {
            return Err(ParseError::MissingData("empty map".to_string()));
        }
        Ok(forest)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.trees_on_slope(PART1_SLOPE).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(PART2_SLOPES
            .iter()
            .map(|&slope| shared.trees_on_slope(slope))
            .product::<usize>()
            .to_string())
    }
}
