use crate::areas::repository::Repository;

impl Repository {
    pub fn status(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            writeln!(self.writer(), "No files are staged.")?;
            return Ok(());
        }

        writeln!(self.writer(), "Staged files:")?;
        for entry in index.entries() {
            writeln!(self.writer(), "{}", entry.to_line())?;
        }

        Ok(())
    }
}
