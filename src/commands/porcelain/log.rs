use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object::Object;
use colored::Colorize;

const ENTRY_SEPARATOR: &str = "------------------------";

impl Repository {
    /// Print the first-parent history of HEAD, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let start = self.refs().resolve_head()?;
        if start.is_none() {
            writeln!(self.writer(), "No commits yet.")?;
            return Ok(());
        }

        for entry in RevList::new(self.database(), start) {
            writeln!(
                self.writer(),
                "{}",
                format!("Commit: {}", entry.oid).yellow()
            )?;
            writeln!(self.writer(), "{}", entry.commit.display())?;
            writeln!(self.writer(), "{ENTRY_SEPARATOR}")?;
        }

        Ok(())
    }
}
