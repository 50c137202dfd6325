//! Content-addressed object store
//!
//! Objects live in `.mygit/objects/<digest>` as raw, uncompressed bytes.
//! Writes are idempotent: an object that is already present is never
//! rewritten. Reads do not re-hash the content, so externally corrupted
//! bytes are returned as they are.

use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Store raw content and return its digest
    pub fn put(&self, content: &[u8]) -> anyhow::Result<ObjectId> {
        let object_id = ObjectId::hash(content);
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored, skipping write");
        } else {
            std::fs::create_dir_all(&self.path)
                .map_err(|source| RepositoryError::io(&self.path, source))
                .context("Unable to create objects directory")?;

            self.write_object(object_path, content)?;
            tracing::debug!(oid = %object_id, size = content.len(), "stored object");
        }

        Ok(object_id)
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        self.put(&object.serialize()?)
    }

    /// Read the raw content stored under a digest
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.is_file() {
            return Err(RepositoryError::not_found(format!(
                "object {} not found",
                object_id
            ))
            .into());
        }

        let content = std::fs::read(&object_path)
            .map_err(|source| RepositoryError::io(&object_path, source))?;

        Ok(content.into())
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        Blob::deserialize(Cursor::new(self.load(object_id)?))
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> anyhow::Result<Tree> {
        Tree::deserialize(Cursor::new(self.load(object_id)?))
            .with_context(|| format!("object {} is not a tree", object_id))
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        Commit::deserialize(Cursor::new(self.load(object_id)?))
            .with_context(|| format!("object {} is not a commit", object_id))
    }

    /// Serialized commit record with surrounding whitespace trimmed,
    /// empty when the object does not exist
    pub fn load_commit_record(&self, object_id: &ObjectId) -> anyhow::Result<String> {
        if !self.contains(object_id) {
            return Ok(String::new());
        }

        let content = self.load(object_id)?;
        Ok(String::from_utf8_lossy(&content).trim().to_string())
    }

    /// Parent digests of a commit, read line by line from the record
    ///
    /// Missing objects have no parents. Lines that are not `parent <digest>`
    /// are ignored, so records that do not fully parse still expose their
    /// parents.
    pub fn load_parents(&self, object_id: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        if !self.contains(object_id) {
            return Ok(Vec::new());
        }

        let content = self.load(object_id)?;
        Ok(String::from_utf8_lossy(&content)
            .lines()
            .filter_map(|line| line.strip_prefix("parent "))
            .filter_map(|oid| ObjectId::try_parse(oid.trim().to_string()).ok())
            .collect())
    }

    fn write_object(&self, object_path: PathBuf, object_content: &[u8]) -> anyhow::Result<()> {
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .map_err(|source| RepositoryError::io(&temp_object_path, source))?;

        file.write_all(object_content)
            .map_err(|source| RepositoryError::io(&temp_object_path, source))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path)
            .map_err(|source| RepositoryError::io(&object_path, source))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
