//! Input readers
//!
//! The string helpers are what the solvers parse with; the path based
//! readers wrap them for callers holding a file instead of its contents.
//! All of them are stateless.

use crate::utils::error::PuzzleError;
use anyhow::{Context, anyhow};
use itertools::Itertools;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error returned by the path based readers
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Format(#[from] PuzzleError),
}

/// Non-empty-terminated lines of `input`, tolerant of `\r\n`
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.trim_end().lines()
}

/// Parse every line with `f`, stopping at the first failure
///
/// The error names the 1-based line number and the cause chain.
pub fn parse_lines<'a, T, F>(input: &'a str, mut f: F) -> Result<Vec<T>, PuzzleError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    lines(input)
        .enumerate()
        .map(|(line_idx, line)| f(line).map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| PuzzleError::InvalidFormat(e.to_string()))
}

/// One decimal integer per line
///
/// A single malformed line fails the whole batch.
pub fn parse_ints(input: &str) -> Result<Vec<i64>, PuzzleError> {
    parse_lines(input, |line| {
        line.trim()
            .parse::<i64>()
            .with_context(|| format!("expected an integer, got {:?}", line))
    })
}

/// Blank-line separated groups of lines
///
/// Runs of blank lines count as one separator; leading and trailing blank
/// lines produce no empty groups.
pub fn groups(input: &str) -> Vec<Vec<&str>> {
    input
        .lines()
        .chunk_by(|line| line.trim().is_empty())
        .into_iter()
        .filter(|(blank, _)| !*blank)
        .map(|(_, group)| group.collect())
        .collect()
}

/// Read a whole file into a string
pub fn read_string(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a file as lines
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let content = read_string(path)?;
    Ok(lines(&content).map(str::to_owned).collect())
}

/// Read a file holding one integer per line
pub fn read_ints(path: impl AsRef<Path>) -> Result<Vec<i64>, InputError> {
    let content = read_string(path)?;
    Ok(parse_ints(&content)?)
}

/// Read a file as blank-line separated groups
pub fn read_groups(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>, InputError> {
    let content = read_string(path)?;
    Ok(groups(&content)
        .into_iter()
        .map(|group| group.into_iter().map(str::to_owned).collect())
        .collect())
}
