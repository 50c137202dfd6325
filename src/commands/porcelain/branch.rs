use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::RepositoryError;
use colored::Colorize;

impl Repository {
    /// Create a branch at the commit HEAD resolves to
    pub fn branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let source_oid = self.refs().resolve_head()?.ok_or_else(|| {
            RepositoryError::invalid_state("No commits found. Please make a commit first.")
        })?;

        self.refs().create_branch(&branch_name, &source_oid)?;
        tracing::info!(branch = %branch_name, oid = %source_oid, "created branch");

        writeln!(
            self.writer(),
            "Branch '{branch_name}' created successfully."
        )?;

        Ok(())
    }

    pub fn list_branches(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let branches = self.refs().list_branches()?;
        if branches.is_empty() {
            writeln!(self.writer(), "No branches found.")?;
            return Ok(());
        }

        let current_branch = self.refs().current_branch();
        for branch in branches {
            if current_branch.as_ref() == Some(&branch) {
                writeln!(self.writer(), "* {}", branch.as_ref().green())?;
            } else {
                writeln!(self.writer(), "  {branch}")?;
            }
        }

        Ok(())
    }

    pub fn current_branch(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let branch = self.refs().current_branch().ok_or_else(|| {
            RepositoryError::invalid_state("Could not determine the current branch.")
        })?;
        writeln!(self.writer(), "Current branch: {branch}")?;

        Ok(())
    }
}
