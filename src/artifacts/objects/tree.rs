//! Flat snapshot ("tree") object
//!
//! A tree is the list of staged entries at commit time, serialized exactly as
//! the index stores them: one `<digest> <filename>\n` line per entry. Entries
//! never nest; `a/b.txt` is one entry, not a directory holding `b.txt`.
//!
//! ## Format
//!
//! ```text
//! <blob-sha> <filename>
//! <blob-sha> <filename>
//! ```

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Anything that can enumerate `(filename, digest)` pairs of a committed state
pub trait Snapshot {
    fn entries(&self) -> impl Iterator<Item = (&str, &ObjectId)>;

    /// Filename to digest lookup; a later entry for the same name wins
    fn file_map(&self) -> BTreeMap<String, ObjectId> {
        self.entries()
            .map(|(name, oid)| (name.to_string(), oid.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<IndexEntry>,
}

impl Tree {
    pub fn build(entries: impl IntoIterator<Item = IndexEntry>) -> Self {
        Tree {
            entries: entries.into_iter().collect(),
        }
    }
}

impl Snapshot for Tree {
    fn entries(&self) -> impl Iterator<Item = (&str, &ObjectId)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), &entry.oid))
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = self
            .entries
            .iter()
            .map(|entry| format!("{}\n", entry.to_line()))
            .collect::<String>();

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line?;
            match IndexEntry::try_parse_line(&line) {
                Ok(entry) => entries.push(entry),
                Err(error) => tracing::warn!(%error, "skipping malformed tree entry"),
            }
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn display(&self) -> String {
        self.entries
            .iter()
            .map(IndexEntry::to_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
