//! First-parent history walk
//!
//! Starting from a commit, follow the first `parent` line until a commit has
//! no parent or cannot be read. The second parent of a merge is never
//! visited, so the walk is always linear.

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub oid: ObjectId,
    pub commit: Commit,
}

#[derive(Clone)]
pub struct RevList<'d> {
    database: &'d Database,
    current_commit_oid: Option<ObjectId>,
}

impl<'d> RevList<'d> {
    pub fn new(database: &'d Database, start: Option<ObjectId>) -> Self {
        RevList {
            database,
            current_commit_oid: start,
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = HistoryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.parse_object_as_commit(&commit_oid) {
            Ok(commit) => {
                self.current_commit_oid = commit.parent().cloned();
                Some(HistoryEntry {
                    oid: commit_oid,
                    commit,
                })
            }
            Err(error) => {
                tracing::debug!(
                    oid = %commit_oid,
                    %error,
                    "history walk stopped at unreadable commit"
                );
                None
            }
        }
    }
}
