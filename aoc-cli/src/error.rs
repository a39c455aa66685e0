//! Error types for the CLI

use aoc_solver::{ParseError, SolveError};
use thiserror::Error;

/// Errors that stop the run before any solver executes
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}

/// Why a single part produced no answer
///
/// These never abort the run; the part is reported as failed and the
/// executor moves on.
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input file missing/unreadable, or no solver behind the key
    #[error("Input unavailable for {year}/{day:02}: {message}")]
    Unavailable { year: u16, day: u8, message: String },

    /// Input did not parse
    #[error("Parse failed for {year}/{day:02}: {source}")]
    Parse {
        year: u16,
        day: u8,
        #[source]
        source: ParseError,
    },

    /// Solver ran but found no answer
    #[error("{0}")]
    Solve(#[from] SolveError),
}
