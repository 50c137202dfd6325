use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;

impl Repository {
    /// Drop the staged records of the given filenames
    pub fn unstage(&mut self, file_names: &[String]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            writeln!(self.writer(), "No files are staged.")?;
            return Ok(());
        }

        let file_names = file_names
            .iter()
            .map(|name| Workspace::normalize_name(name))
            .collect::<Vec<_>>();
        let removed = index.remove_names(&file_names);

        if removed.is_empty() {
            writeln!(self.writer(), "No matching files found to unstage.")?;
            return Ok(());
        }

        index.write_updates()?;
        for entry in removed {
            writeln!(self.writer(), "Unstaged {}", entry.name)?;
        }

        Ok(())
    }

    pub fn unstage_all(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            writeln!(self.writer(), "No files are staged.")?;
            return Ok(());
        }

        index.clear();
        index.write_updates()?;
        writeln!(self.writer(), "All files have been unstaged.")?;

        Ok(())
    }
}
