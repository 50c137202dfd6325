//! Content-addressed object types
//!
//! Every object is stored as its raw bytes, keyed by the SHA-1 digest of
//! those bytes. There is no type header on disk; the kind of an object is
//! known from the context it is reached through:
//!
//! - **Blob**: file content exactly as staged
//! - **Tree**: flat snapshot, one `<digest> <filename>` line per staged file
//! - **Commit**: text record linking a tree to its parents plus metadata

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
