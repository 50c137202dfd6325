use crate::areas::repository::Repository;
use crate::areas::workspace::{REPOSITORY_DIR_NAME, Workspace};
use crate::artifacts::core::error::RepositoryError;
use std::path::Path;

impl Repository {
    /// Copy a repository and its working files into `destination`
    pub fn clone_into(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        let source = self.path().join(source);
        let destination = self.path().join(destination);

        if !source.join(REPOSITORY_DIR_NAME).is_dir() {
            return Err(RepositoryError::invalid_state(format!(
                "The source path is not a valid repository: {}",
                source.display()
            ))
            .into());
        }

        let copied = Workspace::copy_tree(&source, &destination)?;
        tracing::info!(
            source = %source.display(),
            destination = %destination.display(),
            files = copied,
            "cloned repository"
        );

        writeln!(
            self.writer(),
            "Repository cloned successfully to: {}",
            destination.display()
        )?;

        Ok(())
    }
}
