//! Parsed puzzles and their timings

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock interval (UTC) covered by one parse or one part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    /// Run `f`, recording when it started and finished
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Span) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Span { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer to one part
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub span: Span,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// A parsed puzzle ready to be solved part by part
///
/// Parts run against the same shared data, so a part may cache work for the
/// next one.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parsed: Span,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input`, recording how long it took
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = Span::measure(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parsed,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} ({})", result.part, result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve one part, rejecting 0 and anything above [`DynSolver::parts`]
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_span(&self) -> Span;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_span().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, span) = Span::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            part,
            answer: answer?,
            span,
        })
    }

    fn parse_span(&self) -> Span {
        self.parsed
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
