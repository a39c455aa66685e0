//! Error types for the solver library
//!
//! Parsing, solving, lookup and registration each get their own enum, so a
//! caller can tell a bad input file from a bad part number from a missing
//! solver. [`SolverError`] wraps the first two for registry callers.

use std::error::Error as StdError;
use thiserror::Error;

/// The input could not be turned into shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("missing data: {0}")]
    MissingData(String),
    #[error("{0}")]
    Other(String),
}

/// A part could not be answered
#[derive(Debug, Error)]
pub enum SolveError {
    /// Within `1..=PARTS` but without a `PartSolver` impl behind it
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Zero, or above the solver's `PARTS`
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The part ran and gave up, e.g. no answer satisfies the puzzle
    #[error("solve failed: {0}")]
    SolveFailed(#[source] Box<dyn StdError + Send + Sync>),
}

impl SolveError {
    pub fn failed(e: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::SolveFailed(e.into())
    }
}

/// Registry lookup or instance creation failed
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    #[error("{0}/{1:02} is outside the supported years and days")]
    InvalidYearDay(u16, u8),
    #[error("parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// A solver could not be added to the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("a solver is already registered for {0}/{1:02}")]
    DuplicateSolver(u16, u8),
    #[error("cannot register {0}/{1:02}: outside the supported years and days")]
    InvalidYearDay(u16, u8),
}
