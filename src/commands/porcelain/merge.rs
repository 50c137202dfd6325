use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::merge::ancestor_finder::AncestorFinder;
use crate::artifacts::merge::resolution::{Resolution, Side, resolve};
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;

/// File in the working directory receiving the merge output
pub const MERGED_FILE_NAME: &str = "merged_file.txt";

impl Repository {
    pub fn merge(&mut self, source_branch: &str) -> anyhow::Result<()> {
        let conflict = self.merge_branch(source_branch)?;

        if conflict {
            writeln!(
                self.writer(),
                "{}",
                "Merge completed with conflicts. Please resolve them manually.".red()
            )?;
        } else {
            writeln!(self.writer(), "Merge completed successfully.")?;
        }

        Ok(())
    }

    /// Merge `source_branch` into the current branch, returning whether the
    /// merge conflicted
    ///
    /// The three-way resolution runs over the serialized commit records of
    /// the common ancestor and both tips, and its output goes to
    /// `merged_file.txt`. A clean merge is recorded as a commit with both
    /// tips as parents; a conflicting one leaves the refs untouched.
    pub fn merge_branch(&self, source_branch: &str) -> anyhow::Result<bool> {
        self.ensure_initialized()?;

        let current_branch = self
            .refs()
            .current_branch()
            .ok_or_else(|| RepositoryError::invalid_state("No current branch found."))?;
        let source_branch = BranchName::try_parse(source_branch.to_string())?;

        if current_branch == source_branch {
            return Err(RepositoryError::invalid_state(format!(
                "Already on branch '{source_branch}'. Nothing to merge."
            ))
            .into());
        }
        if !self.refs().branch_exists(&source_branch) {
            return Err(RepositoryError::not_found(format!(
                "Branch '{source_branch}' does not exist."
            ))
            .into());
        }

        let (Some(ours_oid), Some(theirs_oid)) = (
            self.refs().read_branch(&current_branch)?,
            self.refs().read_branch(&source_branch)?,
        ) else {
            return Err(RepositoryError::invalid_state(
                "One of the branches has no commits to merge.",
            )
            .into());
        };

        let database = self.database();
        let base_oid = AncestorFinder::new(|oid: &ObjectId| database.load_parents(oid))
            .find_common_ancestor(&ours_oid, &theirs_oid)?
            .ok_or_else(|| RepositoryError::invalid_state("No common ancestor found."))?;

        let base = database.load_commit_record(&base_oid)?;
        let ours = database.load_commit_record(&ours_oid)?;
        let theirs = database.load_commit_record(&theirs_oid)?;

        let resolution = resolve(&base, &ours, &theirs);
        tracing::info!(
            base = %base_oid,
            ours = %ours_oid,
            theirs = %theirs_oid,
            conflict = resolution.is_conflict(),
            "resolved merge"
        );

        self.workspace()
            .write_file(MERGED_FILE_NAME, resolution.content().as_bytes())?;

        let taken_oid = match resolution {
            Resolution::Conflict { .. } => return Ok(true),
            Resolution::Clean {
                side: Side::Ours, ..
            } => &ours_oid,
            Resolution::Clean {
                side: Side::Theirs,
                ..
            } => &theirs_oid,
        };

        let merge_commit_oid = self.write_merge_commit(
            taken_oid,
            ours_oid.clone(),
            theirs_oid.clone(),
            format!("Merge branch '{source_branch}'"),
        )?;
        self.refs().set_branch(&current_branch, &merge_commit_oid)?;

        Ok(false)
    }

    /// Store a two-parent commit reusing the snapshot of `taken_oid`
    fn write_merge_commit(
        &self,
        taken_oid: &ObjectId,
        ours_oid: ObjectId,
        theirs_oid: ObjectId,
        message: String,
    ) -> anyhow::Result<ObjectId> {
        let tree_oid = self
            .database()
            .parse_object_as_commit(taken_oid)?
            .tree_oid()
            .clone();

        let commit = Commit::new(
            vec![ours_oid, theirs_oid],
            tree_oid,
            Author::load_from_env()?,
            message,
        );
        let commit_oid = self.database().store(&commit)?;
        tracing::info!(oid = %commit_oid, "created merge commit");

        Ok(commit_oid)
    }
}
