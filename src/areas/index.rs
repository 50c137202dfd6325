//! Staging area
//!
//! The index file `.mygit/index` holds one `<digest> <filename>` record per
//! line, in staging order. New records are appended; the file is only
//! rewritten when entries are unstaged and emptied after a commit.

use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::index::index_entry::IndexEntry;
use anyhow::Context;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.mygit/index`)
    path: Box<Path>,
    entries: Vec<IndexEntry>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
        }
    }

    /// Load the staged entries from disk
    ///
    /// A missing index file loads as empty. Blank lines are skipped.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|source| RepositoryError::io(&self.path, source))?;

        self.entries = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(IndexEntry::try_parse_line)
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("corrupted index file {:?}", self.path))?;

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First staged entry recorded under a filename
    pub fn entry_by_name(&self, name: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Append a record to the index file
    pub fn append(&mut self, entry: IndexEntry) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| RepositoryError::io(parent, source))?;
        }

        let mut index_file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| RepositoryError::io(&self.path, source))?;
        let mut lock = file_guard::lock(&mut index_file, Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock index file at {:?}", self.path))?;
        writeln!(lock.deref_mut(), "{}", entry.to_line())
            .map_err(|source| RepositoryError::io(&self.path, source))?;

        self.entries.push(entry);

        Ok(())
    }

    /// Drop every record whose filename is in `names`, returning the dropped records
    pub fn remove_names(&mut self, names: &[String]) -> Vec<IndexEntry> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| names.contains(&entry.name));
        self.entries = kept;

        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Rewrite the index file from the in-memory entries
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| RepositoryError::io(&self.path, source))?;
        let mut lock = file_guard::lock(&mut index_file, Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock index file at {:?}", self.path))?;

        let content = self
            .entries
            .iter()
            .map(|entry| format!("{}\n", entry.to_line()))
            .collect::<String>();
        lock.deref_mut()
            .write_all(content.as_bytes())
            .map_err(|source| RepositoryError::io(&self.path, source))?;

        Ok(())
    }
}
