use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::index::ignore::IgnoreRules;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use colored::Colorize;

/// Argument that stages every file in the working directory
pub const ADD_ALL: &str = ".";

impl Repository {
    /// Stage one file, or every file when `path` is `.`
    ///
    /// Each staged file appends a record to the index, even when the same
    /// name is already staged.
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let ignore_rules = IgnoreRules::load(self.workspace().path())?;
        let file_names = if path == ADD_ALL {
            self.workspace().list_files()?
        } else {
            vec![Workspace::normalize_name(path)]
        };

        let mut index = self.index();
        index.rehydrate()?;

        for file_name in file_names {
            if ignore_rules.is_ignored(&file_name) {
                writeln!(self.writer(), "{}", format!("Ignored: {file_name}").yellow())?;
                continue;
            }

            let data = self.workspace().read_file(&file_name)?;
            let blob_id = self.database().store(&Blob::new(data.into()))?;

            index.append(IndexEntry::new(blob_id.clone(), file_name.clone()))?;
            tracing::debug!(file = %file_name, oid = %blob_id, "staged file");

            writeln!(self.writer(), "Staged {file_name}")?;
        }

        Ok(())
    }
}
