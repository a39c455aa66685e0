//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Year assumed when a literal input file is given without `--year`
pub const DEFAULT_YEAR: u16 = 2020;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory path
    pub input_dir: PathBuf,
    /// Literal input file pinned to the selected day
    pub input_file: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input_file = args.input.as_deref().map(expand_tilde);

        let year_filter = match (&input_file, args.year) {
            (Some(_), None) => Some(DEFAULT_YEAR),
            (_, year) => year,
        };

        Ok(Config {
            year_filter,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_file,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn resolve(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap();
        Config::from_args(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = resolve(&[]);
        assert_eq!(config.year_filter, None);
        assert_eq!(config.day_filter, None);
        assert_eq!(config.part_filter, None);
        assert!(config.tags.is_empty());
        assert_eq!(config.input_dir, PathBuf::from("inputs"));
        assert!(config.input_file.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_input_file_defaults_year() {
        let config = resolve(&["--day", "5", "--input", "seats.txt"]);
        assert_eq!(config.year_filter, Some(DEFAULT_YEAR));
        assert_eq!(config.day_filter, Some(5));
        assert_eq!(config.input_file, Some(PathBuf::from("seats.txt")));

        let config = resolve(&["--year", "2021", "--day", "5", "--input", "seats.txt"]);
        assert_eq!(config.year_filter, Some(2021));
    }

    #[test]
    fn test_input_file_requires_day() {
        assert!(Args::try_parse_from(["aoc", "--input", "seats.txt"]).is_err());
    }

    #[test]
    fn test_day_and_part_ranges() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "25", "--part", "2"]).is_ok());
    }

    #[test]
    fn test_tags_are_comma_separated() {
        let config = resolve(&["--tags", "2020,binary"]);
        assert_eq!(config.tags, vec!["2020".to_string(), "binary".to_string()]);
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home.join(""));
        }
    }
}
