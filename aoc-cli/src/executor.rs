//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Result from a single part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ExecutorError>,
    /// Shared by every part of a day; `None` when parsing never happened
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected year/day/part in order on the calling thread
pub struct Executor {
    registry: SolverRegistry,
    store: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            store: InputStore::new(config.input_dir.clone(), config.input_file.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(self.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Input files the given work items would read but cannot find
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<PathBuf> {
        work_items
            .iter()
            .filter(|w| !self.store.contains(w.year, w.day))
            .map(|w| self.store.input_path(w.year, w.day))
            .collect()
    }

    /// Run every work item, handing each part's result to `emit` as soon as
    /// it is known
    pub fn execute(&self, work_items: &[WorkItem], mut emit: impl FnMut(SolverResult)) {
        for work in work_items {
            self.run_solver(work, &mut emit);
        }
    }

    fn run_solver(&self, work: &WorkItem, emit: &mut impl FnMut(SolverResult)) {
        let (year, day) = (work.year, work.day);

        let input = match self.store.get(year, day) {
            Ok(input) => input,
            Err(e) => {
                let message = e.to_string();
                return fail_all(work, emit, || ExecutorError::Unavailable {
                    year,
                    day,
                    message: message.clone(),
                });
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(SolverError::ParseError(source)) => {
                return fail_all(work, emit, || ExecutorError::Parse {
                    year,
                    day,
                    source: source.clone(),
                });
            }
            Err(e) => {
                let message = e.to_string();
                return fail_all(work, emit, || ExecutorError::Unavailable {
                    year,
                    day,
                    message: message.clone(),
                });
            }
        };

        for part in work.parts.clone() {
            emit(solve_part(year, day, part, &mut *solver));
        }
    }
}

/// Filter parts based on the part filter and the solver's max parts
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

/// Emit one failed result per selected part
fn fail_all(
    work: &WorkItem,
    emit: &mut impl FnMut(SolverResult),
    error: impl Fn() -> ExecutorError,
) {
    for part in work.parts.clone() {
        emit(SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(error()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}
