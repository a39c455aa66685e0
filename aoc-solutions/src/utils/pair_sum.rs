//! Complement search: find entries of a list that add up to a target
//!
//! Lookup goes through a map from complement (`target - n`) to every index
//! holding an `n` with that complement, so duplicates never hide a pair and
//! an entry is never paired with itself.

use crate::utils::error::PuzzleError;
use std::collections::HashMap;

/// Find two entries at distinct positions summing to `target`
///
/// Scans `nums` in order and returns the first hit, with the pair ordered by
/// position in `nums`.
///
/// ```
/// use aoc_solutions::utils::pair_sum::find_complement_pair;
///
/// let pair = find_complement_pair(&[1721, 979, 366, 299, 675, 1456], 2020).unwrap();
/// assert_eq!(pair, (1721, 299));
/// ```
pub fn find_complement_pair(nums: &[i64], target: i64) -> Result<(i64, i64), PuzzleError> {
    let mut complements: HashMap<i64, Vec<usize>> = HashMap::with_capacity(nums.len());
    for (i, &n) in nums.iter().enumerate() {
        if let Some(complement) = target.checked_sub(n) {
            complements.entry(complement).or_default().push(i);
        }
    }

    nums.iter()
        .enumerate()
        .find_map(|(j, &n)| {
            let i = *complements.get(&n)?.iter().find(|&&i| i != j)?;
            Some(if i < j { (nums[i], n) } else { (n, nums[i]) })
        })
        .ok_or_else(|| PuzzleError::not_found(format!("no two entries sum to {}", target)))
}

/// Find three entries at distinct positions summing to `target`
///
/// Fixes each entry in turn and searches the remaining entries for a pair
/// summing to the rest. The caller's slice is left untouched.
pub fn find_complement_triple(
    nums: &[i64],
    target: i64,
) -> Result<(i64, i64, i64), PuzzleError> {
    nums.iter()
        .enumerate()
        .find_map(|(i, &n)| {
            let rest: Vec<i64> = without_index(nums, i).collect();
            let (a, b) = find_complement_pair(&rest, target.checked_sub(n)?).ok()?;
            Some((n, a, b))
        })
        .ok_or_else(|| PuzzleError::not_found(format!("no three entries sum to {}", target)))
}

fn without_index(nums: &[i64], skip: usize) -> impl Iterator<Item = i64> + '_ {
    nums.iter()
        .enumerate()
        .filter(move |&(i, _)| i != skip)
        .map(|(_, &n)| n)
}
