//! Shared utilities and types
//!
//! - `error`: typed failures surfaced by repository operations

pub mod error;
