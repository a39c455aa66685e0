//! Read-only store of puzzle inputs on the local filesystem

use aoc_solutions::utils::input::{InputError, read_string};
use std::path::PathBuf;

/// File-based input store
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`. A pinned file,
/// when set, stands in for every year/day.
pub struct InputStore {
    input_dir: PathBuf,
    pinned: Option<PathBuf>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf, pinned: Option<PathBuf>) -> Self {
        Self { input_dir, pinned }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.pinned {
            Some(path) => path.clone(),
            None => self.input_dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        read_string(self.input_path(year, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), None);

        let path = store.input_path(2020, 1);
        assert_eq!(path, temp.path().join("2020_day01.txt"));

        let path = store.input_path(2020, 25);
        assert!(path.to_string_lossy().ends_with("2020_day25.txt"));
    }

    #[test]
    fn test_get() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), None);

        assert!(!store.contains(2020, 5));
        assert!(matches!(store.get(2020, 5), Err(InputError::Io { .. })));

        let input = "FBFBBFFRLR\n";
        fs::write(temp.path().join("2020_day05.txt"), input).unwrap();
        assert!(store.contains(2020, 5));
        assert_eq!(store.get(2020, 5).unwrap(), input);
    }

    #[test]
    fn test_pinned_file_wins() {
        let temp = TempDir::new().unwrap();
        let pinned = temp.path().join("custom.txt");
        fs::write(&pinned, "1721\n299\n").unwrap();
        fs::write(temp.path().join("2020_day01.txt"), "1\n").unwrap();

        let store = InputStore::new(temp.path().to_path_buf(), Some(pinned.clone()));
        assert_eq!(store.input_path(2020, 1), pinned);
        assert_eq!(store.get(2020, 1).unwrap(), "1721\n299\n");
    }
}
