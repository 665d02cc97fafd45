use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// History from the current commit, newest first, at most `limit` entries
    pub fn rev_list(&self, limit: Option<usize>) -> anyhow::Result<RevList<'_>> {
        self.ensure_readable()?;

        let start = self.refs().read_prev()?;
        if start.is_root() && limit != Some(0) {
            return Err(RepositoryError::NoCommits.into());
        }

        Ok(RevList::new(self.database(), start, limit))
    }

    pub fn log(&self, limit: Option<usize>) -> anyhow::Result<()> {
        let rev_list = self.rev_list(limit)?;
        let mut writer = self.writer();

        writeln!(writer)?;
        for commit in rev_list {
            let commit = commit?;
            write!(writer, "commit {}\n\t{}\n\n", commit.id(), commit.message())?;
        }

        Ok(())
    }
}
