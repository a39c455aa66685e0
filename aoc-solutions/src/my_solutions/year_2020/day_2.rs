use crate::utils::input::parse_lines;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::sync::LazyLock;

static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)-(\d+) (\w): (\w+)$").expect("password entry pattern is valid")
});

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 2, tags = ["2020", "parsing"])]
pub struct Solver;

/// One line of the password database: `lo-hi letter: password`
#[derive(Debug, PartialEq, Eq)]
pub struct PasswordEntry<'a> {
    lo: usize,
    hi: usize,
    letter: char,
    password: &'a str,
}

impl<'a> PasswordEntry<'a> {
    fn parse(line: &'a str) -> anyhow::Result<Self> {
        let caps = ENTRY_PATTERN
            .captures(line.trim())
            .ok_or_else(|| anyhow!("expected `lo-hi c: password`, got {:?}", line))?;

        let lo = caps[1].parse().context("lower bound")?;
        let hi = caps[2].parse().context("upper bound")?;
        let letter = caps[3]
            .chars()
            .next()
            .ok_or_else(|| anyhow!("missing policy letter"))?;
        // `password` must borrow from `line`, not from `caps`
        let password = caps
            .get(4)
            .map(|m| m.as_str())
            .ok_or_else(|| anyhow!("missing password"))?;

        Ok(Self {
            lo,
            hi,
            letter,
            password,
        })
    }

    /// Letter count lies within `lo..=hi`
    fn is_valid_by_count(&self) -> bool {
        let count = self.password.chars().filter(|&c| c == self.letter).count();
        (self.lo..=self.hi).contains(&count)
    }

    /// Exactly one of the 1-based positions `lo` and `hi` holds the letter.
    /// Positions outside the password never match.
    fn is_valid_by_position(&self) -> bool {
        let at = |pos: usize| {
            pos.checked_sub(1)
                .and_then(|idx| self.password.chars().nth(idx))
                == Some(self.letter)
        };
        at(self.lo) != at(self.hi)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<PasswordEntry<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(parse_lines(input, PasswordEntry::parse)?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|entry| entry.is_valid_by_count())
            .count()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|entry| entry.is_valid_by_position())
            .count()
            .to_string())
    }
}
