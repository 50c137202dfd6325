//! Diff algorithms
//!
//! - `line_diff`: positional line-by-line comparison of two texts
//! - `tree_diff`: file-level comparison of two snapshots

pub mod line_diff;
pub mod tree_diff;
