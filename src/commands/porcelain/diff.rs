use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::diff::line_diff::{LineChange, compare_lines};
use crate::artifacts::diff::tree_diff::{TreeChange, compare_snapshots};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use colored::Colorize;

impl Repository {
    /// Compare a working file against the blob staged under its name
    pub fn diff_file(&self, file_name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let file_name = Workspace::normalize_name(file_name);
        if !self.workspace().is_file(&file_name) {
            return Err(RepositoryError::not_found(format!(
                "File not found in working directory: {file_name}"
            ))
            .into());
        }

        let mut index = self.index();
        index.rehydrate()?;
        let staged_oid = index
            .entry_by_name(&file_name)
            .map(|entry| entry.oid.clone())
            .ok_or_else(|| RepositoryError::not_found(format!("File not staged: {file_name}")))?;
        drop(index);

        if !self.database().contains(&staged_oid) {
            return Err(RepositoryError::not_found(format!(
                "Staged object not found: {staged_oid}"
            ))
            .into());
        }

        let working_lines = self.workspace().read_lines(&file_name)?;
        let staged_lines = self.database().parse_object_as_blob(&staged_oid)?.lines();

        writeln!(self.writer(), "{}", format!("Diff for {file_name}:").bold())?;
        self.print_line_changes(&compare_lines(&staged_lines, &working_lines))?;

        Ok(())
    }

    /// Compare the snapshots at the tips of two branches, file by file
    pub fn diff_branches(&self, first: &str, second: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let first_tree = self.branch_tree(first)?;
        let second_tree = self.branch_tree(second)?;

        for change in compare_snapshots(&first_tree, &second_tree) {
            match &change {
                TreeChange::Added { name, .. } => {
                    writeln!(
                        self.writer(),
                        "{}",
                        format!("File added in second branch: {name}").green()
                    )?;
                }
                TreeChange::Deleted { name, .. } => {
                    writeln!(
                        self.writer(),
                        "{}",
                        format!("File deleted in second branch: {name}").red()
                    )?;
                }
                TreeChange::Modified { name, old, new } => {
                    writeln!(
                        self.writer(),
                        "{}",
                        format!("File modified: {name}").yellow()
                    )?;
                    self.print_blob_diff(name, old, new)?;
                }
            }
        }

        Ok(())
    }

    fn branch_tree(&self, branch: &str) -> anyhow::Result<Tree> {
        let branch_name = BranchName::try_parse(branch.to_string())?;
        if !self.refs().branch_exists(&branch_name) {
            return Err(
                RepositoryError::not_found(format!("Branch '{branch}' does not exist.")).into(),
            );
        }

        let commit_oid = self.refs().read_branch(&branch_name)?.ok_or_else(|| {
            RepositoryError::invalid_state(format!("Branch '{branch}' has no commits."))
        })?;
        let commit = self.database().parse_object_as_commit(&commit_oid)?;

        self.database().parse_object_as_tree(commit.tree_oid())
    }

    fn print_blob_diff(&self, name: &str, old: &ObjectId, new: &ObjectId) -> anyhow::Result<()> {
        let old_lines = self.database().parse_object_as_blob(old)?.lines();
        let new_lines = self.database().parse_object_as_blob(new)?.lines();

        writeln!(
            self.writer(),
            "{}",
            format!("--- {name} (branch1)").bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {name} (branch2)").bold()
        )?;
        self.print_line_changes(&compare_lines(&old_lines, &new_lines))
    }

    fn print_line_changes(&self, changes: &[LineChange]) -> anyhow::Result<()> {
        for change in changes {
            writeln!(self.writer(), "{}", format!("- {}", change.removed).red())?;
            writeln!(self.writer(), "{}", format!("+ {}", change.added).green())?;
        }

        Ok(())
    }
}
