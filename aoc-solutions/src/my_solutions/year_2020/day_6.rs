use crate::utils::PuzzleError;
use crate::utils::input::groups;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 6, tags = ["2020", "sets"])]
pub struct Solver;

/// Questions `a..=z` answered "yes", one bit per letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Answers(u32);

impl Answers {
    const ALL: Answers = Answers((1 << 26) - 1);

    fn parse(line: &str) -> Result<Self, PuzzleError> {
        line.trim().bytes().try_fold(Self::default(), |acc, b| match b {
            b'a'..=b'z' => Ok(Self(acc.0 | 1 << (b - b'a'))),
            other => Err(PuzzleError::invalid_format(format!(
                "unexpected answer {:?}",
                other as char
            ))),
        })
    }

    fn len(self) -> u32 {
        self.0.count_ones()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<Answers>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        groups(input)
            .iter()
            .enumerate()
            .map(|(idx, group)| {
                group
                    .iter()
                    .map(|line| Answers::parse(line))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(group {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

/// Questions anyone in the group answered
impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|group| {
                group
                    .iter()
                    .fold(Answers::default(), |acc, a| Answers(acc.0 | a.0))
                    .len()
            })
            .sum::<u32>()
            .to_string())
    }
}

/// Questions everyone in the group answered
impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|group| {
                group
                    .iter()
                    .fold(Answers::ALL, |acc, a| Answers(acc.0 & a.0))
                    .len()
            })
            .sum::<u32>()
            .to_string())
    }
}
