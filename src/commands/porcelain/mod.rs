//! User-facing commands
//!
//! Each command is an `impl Repository` block that loads what it needs from
//! disk, does its work and writes its report to the repository writer.
//!
//! ## Commands
//!
//! - `init`: Create the `.mygit` directory layout
//! - `add`: Stage one file or the whole working directory
//! - `status` / `unstage`: Inspect and edit the staged entries
//! - `commit`: Snapshot the staged entries as a new commit
//! - `log`: Show first-parent history from HEAD
//! - `branch`: Create and list branches, show the current one
//! - `checkout`: Switch branches or detach HEAD
//! - `merge`: Merge another branch into the current one
//! - `diff`: Compare a working file with its staged version, or two branches
//! - `clone`: Copy a repository directory

pub mod add;
pub mod branch;
pub mod checkout;
pub mod clone;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
pub mod status;
pub mod unstage;
