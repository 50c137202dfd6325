//! A minimal content-addressed version control engine
//!
//! - `areas`: on-disk state (object database, refs, index, working directory)
//! - `artifacts`: domain types and algorithms (objects, branches, merge, diff, log)
//! - `commands`: user-facing commands as `impl Repository` blocks

pub mod areas;
pub mod artifacts;
pub mod commands;
