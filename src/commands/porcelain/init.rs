use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::core::error::RepositoryError;
use anyhow::Context;
use std::fs;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            writeln!(
                self.writer(),
                "Repository already initialized in this directory."
            )?;
            return Ok(());
        }

        fs::create_dir_all(self.database().objects_path())
            .map_err(|source| RepositoryError::io(self.database().objects_path(), source))
            .context("Failed to create .mygit/objects directory")?;

        let heads_path = self.refs().heads_path();
        fs::create_dir_all(&heads_path)
            .map_err(|source| RepositoryError::io(&heads_path, source))
            .context("Failed to create .mygit/refs/heads directory")?;

        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs()
            .create_empty_branch(&default_branch)
            .context("Failed to create the default branch")?;
        self.refs()
            .set_head(&Head::Symbolic(default_branch))
            .context("Failed to create initial HEAD reference")?;

        let mut index = self.index();
        index.clear();
        index
            .write_updates()
            .context("Failed to create .mygit/index file")?;
        drop(index);

        tracing::info!(path = %self.git_path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty MyGit repository in {}",
            self.git_path().display()
        )?;

        Ok(())
    }
}
