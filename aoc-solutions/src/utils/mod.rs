pub mod error;
pub mod input;
pub mod pair_sum;

pub use error::PuzzleError;
