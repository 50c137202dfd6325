//! Merge algorithms
//!
//! - `ancestor_finder`: lock-step breadth-first search for a common ancestor
//! - `resolution`: three-way resolution of whole texts with conflict markers

pub mod ancestor_finder;
pub mod resolution;
