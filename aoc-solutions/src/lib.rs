//! Advent of Code 2020 puzzle solutions with automatic registration
//!
//! Each solution uses the `AutoRegisterSolver` derive macro, so linking this
//! crate is enough for `SolverRegistryBuilder::register_all_plugins` to find
//! it. The reusable pieces (input readers, the pair-sum finder, the error
//! taxonomy) live in [`utils`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
