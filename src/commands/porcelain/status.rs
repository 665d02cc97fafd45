use crate::areas::repository::Repository;
use crate::artifacts::index::tracked_path::TrackedPath;
use std::io::Write;

impl Repository {
    /// Tracked paths in the order they were added
    pub fn tracked_files(&self) -> anyhow::Result<Vec<TrackedPath>> {
        self.ensure_readable()?;

        let mut index = self.index();
        index.rehydrate()?;

        Ok(index.entries().to_vec())
    }

    pub fn status(&self) -> anyhow::Result<usize> {
        let tracked = self.tracked_files()?;
        let mut writer = self.writer();

        writeln!(writer, "Tracked files:")?;
        writeln!(writer)?;
        for path in &tracked {
            writeln!(writer, "{path}")?;
        }
        writeln!(writer)?;
        writeln!(writer, "{} files total", tracked.len())?;

        Ok(tracked.len())
    }
}
