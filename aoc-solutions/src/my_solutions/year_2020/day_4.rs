use crate::utils::PuzzleError;
use crate::utils::input::groups;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("year pattern is valid"));
static HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(cm|in)$").expect("height pattern is valid"));
static HAIR_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-f]{6}$").expect("hair color pattern is valid"));
static PASSPORT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}$").expect("passport id pattern is valid"));

/// `cid` is optional
const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];
const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 4, tags = ["2020", "parsing", "validation"])]
pub struct Solver;

#[derive(Debug)]
pub struct Passport<'a> {
    fields: HashMap<&'a str, &'a str>,
}

impl<'a> Passport<'a> {
    fn parse(lines: &[&'a str]) -> Result<Self, PuzzleError> {
        let fields = lines
            .iter()
            .flat_map(|&line| line.split_whitespace())
            .map(|token| {
                token.split_once(':').ok_or_else(|| {
                    PuzzleError::invalid_format(format!("expected `key:value`, got {:?}", token))
                })
            })
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self { fields })
    }

    fn has_required_fields(&self) -> bool {
        REQUIRED_FIELDS
            .iter()
            .all(|key| self.fields.contains_key(key))
    }

    fn is_valid(&self) -> bool {
        REQUIRED_FIELDS.iter().all(|&key| {
            self.fields
                .get(key)
                .is_some_and(|value| is_valid_field(key, value))
        })
    }
}

fn year_in(value: &str, min: u32, max: u32) -> bool {
    YEAR.is_match(value)
        && value
            .parse::<u32>()
            .is_ok_and(|year| (min..=max).contains(&year))
}

fn is_valid_field(key: &str, value: &str) -> bool {
    match key {
        "byr" => year_in(value, 1920, 2002),
        "iyr" => year_in(value, 2010, 2020),
        "eyr" => year_in(value, 2020, 2030),
        "hgt" => HEIGHT.captures(value).is_some_and(|caps| {
            let range = if &caps[2] == "cm" { 150..=193 } else { 59..=76 };
            caps[1]
                .parse::<u32>()
                .is_ok_and(|height| range.contains(&height))
        }),
        "hcl" => HAIR_COLOR.is_match(value),
        "ecl" => EYE_COLORS.contains(&value),
        "pid" => PASSPORT_ID.is_match(value),
        _ => true,
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Passport<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        groups(input)
            .iter()
            .enumerate()
            .map(|(idx, group)| {
                Passport::parse(group).map_err(|e| {
                    ParseError::InvalidFormat(format!("(passport {}) {}", idx + 1, e))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|passport| passport.has_required_fields())
            .count()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|passport| passport.is_valid())
            .count()
            .to_string())
    }
}
