//! References (branches and HEAD)
//!
//! Branches are files under `.mygit/refs/heads/` whose whole content is a
//! commit digest, or the empty string for a branch without commits. HEAD is
//! `.mygit/HEAD` and is either symbolic or detached, see [`Head`].

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// References manager
///
/// Every read goes to disk; writes take an exclusive advisory lock on the
/// file being rewritten.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.mygit`)
    path: Box<Path>,
}

impl Refs {
    /// Read and parse HEAD, `None` when the file is absent or empty
    pub fn read_head(&self) -> anyhow::Result<Option<Head>> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)
            .map_err(|source| RepositoryError::io(&head_path, source))?;

        Head::try_parse(&content).with_context(|| format!("unreadable HEAD file {:?}", head_path))
    }

    /// Branch HEAD points at, `None` when HEAD is detached or unreadable
    pub fn current_branch(&self) -> Option<BranchName> {
        match self.read_head() {
            Ok(Some(Head::Symbolic(branch))) => Some(branch),
            Ok(_) => None,
            Err(error) => {
                tracing::warn!(%error, "unable to determine the current branch");
                None
            }
        }
    }

    /// Commit HEAD resolves to, through its branch when symbolic
    pub fn resolve_head(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.read_head()? {
            Some(Head::Symbolic(branch)) => self.read_branch(&branch),
            Some(Head::Detached(oid)) => Ok(Some(oid)),
            None => Ok(None),
        }
    }

    pub fn set_head(&self, head: &Head) -> anyhow::Result<()> {
        self.update_ref_file(self.head_path(), head.to_file_content())?;
        tracing::debug!(head = %head.to_file_content(), "updated HEAD");

        Ok(())
    }

    /// Advance whatever HEAD resolves through to a new commit
    ///
    /// A symbolic HEAD moves its branch; a detached HEAD is rewritten.
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        match self.read_head()? {
            Some(Head::Symbolic(branch)) => self.set_branch(&branch, oid),
            Some(Head::Detached(_)) => self.set_head(&Head::Detached(oid.clone())),
            None => Err(RepositoryError::invalid_state(
                "HEAD is missing; run 'mygit init' first",
            )
            .into()),
        }
    }

    pub fn branch_exists(&self, branch: &BranchName) -> bool {
        self.branch_path(branch).is_file()
    }

    /// Commit a branch points at, `None` when absent or without commits
    pub fn read_branch(&self, branch: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch);
        if !branch_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .map_err(|source| RepositoryError::io(&branch_path, source))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::try_parse(content.to_string()).with_context(
                || format!("branch {} holds an invalid digest", branch),
            )?))
        }
    }

    /// Point a branch at a commit, creating it and its directories as needed
    pub fn set_branch(&self, branch: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(self.branch_path(branch), oid.to_string())?;
        tracing::debug!(%branch, %oid, "updated branch");

        Ok(())
    }

    pub fn create_branch(&self, branch: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(branch) {
            return Err(
                RepositoryError::invalid_state(format!("branch '{}' already exists", branch))
                    .into(),
            );
        }

        self.set_branch(branch, oid)
    }

    /// Create a branch file with no commits, used by `init`
    pub fn create_empty_branch(&self, branch: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(self.branch_path(branch), String::new())
    }

    /// All branch names, sorted, nested names joined with `/`
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();
        if !heads_path.exists() {
            return Ok(Vec::new());
        }

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        let parent = path
            .parent()
            .with_context(|| format!("invalid ref file path {:?}", path))?;
        std::fs::create_dir_all(parent).map_err(|source| RepositoryError::io(parent, source))?;

        // open the ref file as WRONLY and CREAT to write the new value to it
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| RepositoryError::io(&path, source))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock ref file at {:?}", path))?;
        lock.deref_mut()
            .write_all(raw_ref.as_bytes())
            .map_err(|source| RepositoryError::io(&path, source))?;

        Ok(())
    }

    fn branch_path(&self, branch: &BranchName) -> Box<Path> {
        self.heads_path().join(branch.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
