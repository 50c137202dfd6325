//! Repository error taxonomy
//!
//! Operations return `anyhow::Result` like the rest of the crate, but every
//! failure the user is expected to act on is rooted in a [`RepositoryError`]
//! so callers can classify it with `downcast_ref`.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A file, branch, object or digest does not exist
    #[error("{0}")]
    NotFound(String),
    /// The repository is in a state that forbids the operation
    #[error("{0}")]
    InvalidState(String),
    /// The underlying storage failed
    #[error("unable to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RepositoryError {
    pub fn not_found(message: impl Into<String>) -> Self {
        RepositoryError::NotFound(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        RepositoryError::InvalidState(message.into())
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, RepositoryError::InvalidState(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let error = RepositoryError::io(
            Path::new("/tmp/objects/abc"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(error.to_string(), "unable to access /tmp/objects/abc: denied");
    }

    #[test]
    fn classification_survives_anyhow_context() {
        let error: anyhow::Error = RepositoryError::not_found("branch 'dev' does not exist").into();
        let error = error.context("checkout failed");

        let root = error
            .downcast_ref::<RepositoryError>()
            .expect("root cause should be a RepositoryError");
        assert!(root.is_not_found());
        assert!(!root.is_invalid_state());
    }
}
