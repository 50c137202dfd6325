use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::object_id::ObjectId;

const DETACHMENT_NOTICE: &str = "You are in 'detached HEAD' state. New commits will move HEAD \
itself; create a branch with 'mygit branch <name>' to keep them.";

impl Repository {
    /// Point HEAD at a branch, or detach it at a stored commit
    ///
    /// The working directory and the index are left as they are. When the
    /// target is neither a branch nor a stored commit, HEAD is not touched.
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        if let Ok(branch) = BranchName::try_parse(target.to_string())
            && self.refs().branch_exists(&branch)
        {
            self.refs().set_head(&Head::Symbolic(branch.clone()))?;
            tracing::info!(%branch, "switched branch");
            writeln!(self.writer(), "Switched to branch '{branch}'.")?;

            return Ok(());
        }

        match ObjectId::try_parse(target.to_string()) {
            Ok(oid) if self.database().parse_object_as_commit(&oid).is_ok() => {
                self.refs().set_head(&Head::Detached(oid.clone()))?;
                tracing::info!(%oid, "detached HEAD");
                writeln!(self.writer(), "HEAD is now at {}.", oid.to_short_oid())?;
                writeln!(self.writer(), "{DETACHMENT_NOTICE}")?;

                Ok(())
            }
            _ => Err(
                RepositoryError::not_found(format!("Branch '{target}' does not exist.")).into(),
            ),
        }
    }
}
