//! Error taxonomy shared by the puzzle solutions

use aoc_solver::{ParseError, SolveError};
use thiserror::Error;

/// Why a puzzle could not be answered
///
/// Reported to the immediate caller and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Malformed input line or code
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// No answer satisfies the puzzle constraints
    #[error("not found: {0}")]
    NotFound(String),
}

impl PuzzleError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl From<PuzzleError> for ParseError {
    fn from(e: PuzzleError) -> Self {
        match e {
            PuzzleError::InvalidFormat(msg) => ParseError::InvalidFormat(msg),
            PuzzleError::NotFound(msg) => ParseError::MissingData(msg),
        }
    }
}

impl From<PuzzleError> for SolveError {
    fn from(e: PuzzleError) -> Self {
        SolveError::failed(e)
    }
}
