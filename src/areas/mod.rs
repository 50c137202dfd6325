//! Core repository components
//!
//! This module contains the persistent building blocks of a repository:
//!
//! - `database`: Content-addressed object store for blobs, trees and commits
//! - `index`: Staging area listing the files of the next snapshot
//! - `refs`: Branches and HEAD
//! - `repository`: Ties the areas to one working directory
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
