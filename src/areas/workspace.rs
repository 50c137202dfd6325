//! Working directory access
//!
//! Filenames handed to and returned by the workspace are relative to the
//! working directory root and always use `/` as separator.

use crate::artifacts::core::error::RepositoryError;
use anyhow::Context;
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the repository metadata directory, never part of the workspace
pub const REPOSITORY_DIR_NAME: &str = ".mygit";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_file(&self, file_name: &str) -> bool {
        self.path.join(file_name).is_file()
    }

    /// Every regular file under the root, skipping the repository directory
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut files = WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != OsStr::new(REPOSITORY_DIR_NAME))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .ok()
                    .map(Self::to_file_name)
            })
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    pub fn read_file(&self, file_name: &str) -> anyhow::Result<Vec<u8>> {
        let file_path = self.path.join(file_name);

        if !file_path.is_file() {
            return Err(RepositoryError::not_found(format!(
                "{} does not exist in the working directory",
                file_name
            ))
            .into());
        }

        std::fs::read(&file_path)
            .map_err(|source| RepositoryError::io(&file_path, source).into())
    }

    /// File content split into lines, invalid UTF-8 replaced
    pub fn read_lines(&self, file_name: &str) -> anyhow::Result<Vec<String>> {
        let content = self.read_file(file_name)?;

        Ok(String::from_utf8_lossy(&content)
            .lines()
            .map(str::to_string)
            .collect())
    }

    pub fn write_file(&self, file_name: &str, content: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(file_name);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| RepositoryError::io(parent, source))?;
        }

        std::fs::write(&file_path, content)
            .map_err(|source| RepositoryError::io(&file_path, source))?;

        Ok(())
    }

    /// Recursively copy `source` into `destination`, overwriting existing files
    pub fn copy_tree(source: &Path, destination: &Path) -> anyhow::Result<usize> {
        let mut copied = 0;

        for entry in WalkDir::new(source) {
            let entry = entry.with_context(|| format!("Unable to walk {}", source.display()))?;
            let relative_path = entry
                .path()
                .strip_prefix(source)
                .with_context(|| format!("{} escapes the clone source", entry.path().display()))?;
            let target = destination.join(relative_path);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)
                    .map_err(|error| RepositoryError::io(&target, error))?;
            } else if entry.file_type().is_file() {
                std::fs::copy(entry.path(), &target)
                    .map_err(|error| RepositoryError::io(&target, error))?;
                copied += 1;
            }
        }

        Ok(copied)
    }

    /// Normalize a user supplied name: `/` separators, no leading `./`
    pub fn normalize_name(name: &str) -> String {
        let name = name.replace('\\', "/");
        let mut name = name.as_str();
        while let Some(stripped) = name.strip_prefix("./") {
            name = stripped;
        }

        name.to_string()
    }

    fn to_file_name(path: &Path) -> String {
        path.components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
