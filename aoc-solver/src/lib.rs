//! Advent of Code Solver Library
//!
//! A small, type-safe framework for the 2020 puzzle solutions. Each puzzle is
//! a solver with its own input parser and one answer per part.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`]: turns the raw puzzle input into shared data
//! - [`PartSolver`]: solves one part against the shared data
//! - [`Solver`]: dispatches a runtime part number to the right [`PartSolver`]
//! - [`SolverRegistry`]: looks up solvers by year and day and creates timed instances
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder, register_solver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 1)]
//! pub struct SumDay;
//!
//! impl AocParser for SumDay {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat(line.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for SumDay {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! let mut builder = SolverRegistryBuilder::new();
//! register_solver!(builder, SumDay, 2020, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2020, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Plugins
//!
//! Solutions register themselves with `#[derive(AutoRegisterSolver)]`:
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2020, day = 5, tags = ["2020"])]
//! pub struct Solver;
//! ```
//! and are picked up by [`SolverRegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Span};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
