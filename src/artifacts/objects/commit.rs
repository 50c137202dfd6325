//! Commit object
//!
//! Commits link a snapshot to zero, one or two parents (two only for merge
//! commits) and record who made them and when.
//!
//! ## Format
//!
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name>
//! date <yyyy-MM-dd HH:mm:ss>
//!
//! <commit message>
//! ```
//!
//! The record ends with a newline after the message.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use chrono::{NaiveDateTime, Timelike};
use std::io::BufRead;

/// Format of the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const AUTHOR_NAME_VARS: [&str; 3] = ["MYGIT_AUTHOR_NAME", "USER", "USERNAME"];
const AUTHOR_DATE_VAR: &str = "MYGIT_AUTHOR_DATE";
const UNKNOWN_AUTHOR: &str = "unknown";

/// Author information: a name and a wall-clock timestamp without timezone
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    timestamp: NaiveDateTime,
}

impl Author {
    /// Create a new author stamped with the current local time
    pub fn new(name: String) -> Self {
        let now = chrono::Local::now().naive_local();

        Author {
            name,
            timestamp: now.with_nanosecond(0).unwrap_or(now),
        }
    }

    pub fn new_with_timestamp(name: String, timestamp: NaiveDateTime) -> Self {
        Author { name, timestamp }
    }

    /// Load author information from the environment
    ///
    /// The name comes from the first set variable among `MYGIT_AUTHOR_NAME`,
    /// `USER` and `USERNAME`. `MYGIT_AUTHOR_DATE` overrides the timestamp.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let name = AUTHOR_NAME_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        match std::env::var(AUTHOR_DATE_VAR) {
            Ok(date) => {
                let timestamp = NaiveDateTime::parse_from_str(date.trim(), DATE_FORMAT)
                    .with_context(|| {
                        format!("{AUTHOR_DATE_VAR} must use the yyyy-MM-dd HH:mm:ss format")
                    })?;
                Ok(Author::new_with_timestamp(name, timestamp))
            }
            Err(_) => Ok(Author::new(name)),
        }
    }

    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for the first commit, two for merge commits)
    parents: Vec<ObjectId>,
    tree_oid: ObjectId,
    author: Author,
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        tree_oid: ObjectId,
        author: Author,
        message: String,
    ) -> Self {
        Commit {
            parents,
            tree_oid,
            author,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    /// First parent, the only one followed by history walks
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    fn record_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("tree {}", self.tree_oid)];
        for parent in &self.parents {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("author {}", self.author.name));
        lines.push(format!("date {}", self.author.readable_timestamp()));
        lines.push(String::new());
        lines.push(self.message.clone());

        lines
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut record = self.record_lines().join("\n");
        record.push('\n');

        Ok(Bytes::from(record))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let tree_oid = lines
            .next()
            .context("Invalid commit object: missing tree line")?
            .strip_prefix("tree ")
            .context("Invalid commit object: invalid tree line")?;
        let tree_oid = ObjectId::try_parse(tree_oid.trim().to_string())?;

        let mut parents = Vec::new();
        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing author line")?;

        while let Some(parent_oid) = next_line.strip_prefix("parent ") {
            parents.push(ObjectId::try_parse(parent_oid.trim().to_string())?);

            next_line = lines
                .next()
                .context("Invalid commit object: missing author line")?;
        }

        let name = next_line
            .strip_prefix("author ")
            .context("Invalid commit object: invalid author line")?
            .to_string();

        let date = lines
            .next()
            .context("Invalid commit object: missing date line")?
            .strip_prefix("date ")
            .context("Invalid commit object: invalid date line")?;
        let timestamp = NaiveDateTime::parse_from_str(date.trim(), DATE_FORMAT)
            .context("Invalid commit object: invalid date")?;

        // skip the empty line
        lines.next();

        let message = lines.collect::<Vec<&str>>().join("\n");

        Ok(Self::new(
            parents,
            tree_oid,
            Author::new_with_timestamp(name, timestamp),
            message,
        ))
    }
}

impl Object for Commit {
    fn display(&self) -> String {
        self.record_lines().join("\n")
    }
}
