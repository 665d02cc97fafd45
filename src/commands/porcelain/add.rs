use crate::areas::repository::Repository;
use crate::artifacts::index::tracked_path::TrackedPath;
use crate::errors::RepositoryError;

impl Repository {
    /// Start tracking `path`; the file itself is not read until commit
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        self.ensure_writable()?;
        let tracked = TrackedPath::try_parse(path)?;

        let mut index = self.index();
        index.rehydrate()?;
        // errors name the path the way it was typed
        if index.contains(&tracked) {
            return Err(RepositoryError::AlreadyTracked {
                path: path.to_string(),
            }
            .into());
        }
        index.add(tracked)?;
        index.write_updates()?;

        Ok(())
    }
}
