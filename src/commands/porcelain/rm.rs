use crate::areas::repository::Repository;
use crate::artifacts::index::tracked_path::TrackedPath;
use crate::errors::RepositoryError;

impl Repository {
    /// Stop tracking `path`, leaving the working file in place
    pub fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        self.ensure_writable()?;
        let tracked = TrackedPath::try_parse(path)?;

        let mut index = self.index();
        index.rehydrate()?;
        if !index.contains(&tracked) {
            return Err(RepositoryError::NotTracked {
                path: path.to_string(),
            }
            .into());
        }
        index.remove(&tracked)?;
        index.write_updates()?;

        Ok(())
    }
}
