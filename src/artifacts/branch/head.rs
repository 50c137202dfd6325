//! HEAD pointer
//!
//! HEAD is either symbolic, naming the branch new commits advance, or
//! detached, holding a commit digest directly.
//!
//! ## File Format
//!
//! - `ref: refs/heads/<branch>` for a symbolic HEAD
//! - a bare 40-character digest for a detached HEAD

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;

const SYMREF_PREFIX: &str = "ref: refs/heads/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Symbolic(BranchName),
    Detached(ObjectId),
}

impl Head {
    /// Parse the content of the HEAD file, `None` when it is empty
    pub fn try_parse(content: &str) -> anyhow::Result<Option<Self>> {
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        match content.strip_prefix(SYMREF_PREFIX) {
            Some(branch) => Ok(Some(Head::Symbolic(BranchName::try_parse(
                branch.trim().to_string(),
            )?))),
            None => Ok(Some(Head::Detached(ObjectId::try_parse(
                content.to_string(),
            )?))),
        }
    }

    pub fn to_file_content(&self) -> String {
        match self {
            Head::Symbolic(branch) => format!("{SYMREF_PREFIX}{branch}"),
            Head::Detached(oid) => oid.to_string(),
        }
    }
}
