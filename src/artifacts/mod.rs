//! Version control data structures and algorithms
//!
//! - `branch`: Branch names and the HEAD pointer
//! - `core`: Shared error type
//! - `diff`: Positional line diff and snapshot comparison
//! - `index`: Staged entries and ignore rules
//! - `log`: First-parent history walk
//! - `merge`: Common ancestor search and three-way resolution
//! - `objects`: Stored object types (blob, tree, commit)

pub mod branch;
pub mod core;
pub mod diff;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
