use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;

impl Repository {
    /// Snapshot the staged entries as a new commit on top of HEAD
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let commit_id = self.create_commit(message)?;

        writeln!(
            self.writer(),
            "Committed successfully with commit hash: {commit_id}"
        )?;

        Ok(())
    }

    /// Store the staged snapshot and a commit record, advance HEAD and clear
    /// the index
    ///
    /// Nothing is written when the index is empty or absent.
    pub fn create_commit(&self, message: &str) -> anyhow::Result<ObjectId> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            return Err(RepositoryError::invalid_state(
                "Nothing to commit. The staging area is empty.",
            )
            .into());
        }

        let parent = self.refs().resolve_head()?;

        let files = index.entries().count();
        let tree = Tree::build(index.entries().cloned());
        let tree_id = self.database().store(&tree)?;

        let author = Author::load_from_env()?;
        let commit = Commit::new(
            parent.into_iter().collect(),
            tree_id,
            author,
            message.to_string(),
        );
        let commit_id = self.database().store(&commit)?;

        self.refs().update_head(&commit_id)?;

        index.clear();
        index.write_updates()?;

        tracing::info!(oid = %commit_id, files, "created commit");

        Ok(commit_id)
    }
}
