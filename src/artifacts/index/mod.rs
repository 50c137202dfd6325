//! Staging area data structures
//!
//! The index is a newline-delimited list of `<digest> <filename>` records.
//! It is append-only until a commit clears it; staging the same file twice
//! leaves two records.
//!
//! - `index_entry`: a single staged record
//! - `ignore`: `.mygitignore` pattern matching

pub mod ignore;
pub mod index_entry;
