use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::index::tracked_path::TrackedPath;
use crate::artifacts::objects::commit::Snapshot;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// The working tree: the files the user edits
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn read_file(&self, file_path: &TrackedPath) -> anyhow::Result<Vec<u8>> {
        std::fs::read(self.absolute(file_path))
            .with_context(|| format!("Failed to read tracked file: {}", file_path))
    }

    pub fn write_file(&self, file_path: &TrackedPath, content: &[u8]) -> anyhow::Result<()> {
        let path = self.absolute(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for: {}", file_path))?;
        }

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", file_path))
    }

    /// Delete a file; one that is already gone counts as deleted
    pub fn remove_file(&self, file_path: &TrackedPath) -> anyhow::Result<()> {
        match std::fs::remove_file(self.absolute(file_path)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove file: {}", file_path)),
        }
    }

    /// Read the current content of every path in `tracked`
    pub fn snapshot(&self, tracked: &[TrackedPath]) -> anyhow::Result<Snapshot> {
        let files = tracked
            .iter()
            .map(|path| Ok((path.clone(), self.read_file(path)?)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Snapshot::new(files))
    }

    /// Check that `migration` can be applied without tripping over the working tree
    ///
    /// Every removal must be a file (or already gone), and every restored file
    /// must land on a path whose parents are directories once the removals are
    /// done. Nothing is written.
    pub fn verify_migration(&self, migration: &Migration) -> anyhow::Result<()> {
        for path in migration.removals() {
            if self.is_directory(path.as_path())? {
                return Err(conflict(path.as_ref(), "it is a directory"));
            }
        }

        for (path, _) in migration.restores().files() {
            if self.is_directory(path.as_path())? {
                return Err(conflict(path.as_ref(), "it is a directory"));
            }

            for parent in path.as_path().ancestors().skip(1) {
                if parent.as_os_str().is_empty() {
                    break;
                }
                let removed = migration
                    .removals()
                    .iter()
                    .any(|removal| removal.as_path() == parent);
                if !removed && self.is_non_directory(parent)? {
                    return Err(conflict(
                        path.as_ref(),
                        &format!("{} is not a directory", parent.display()),
                    ));
                }
            }
        }

        Ok(())
    }

    // Every file of the old state is deleted before any file of the new state is
    // written, so a path present in both ends up with the target content.
    pub fn apply_migration(&self, migration: &Migration) -> anyhow::Result<()> {
        migration
            .removals()
            .iter()
            .try_for_each(|path| self.remove_file(path))?;

        migration
            .restores()
            .files()
            .iter()
            .try_for_each(|(path, content)| self.write_file(path, content))?;

        tracing::debug!(
            removed = migration.removals().len(),
            restored = migration.restores().files().len(),
            target = %migration.target(),
            "applied checkout migration"
        );

        Ok(())
    }

    fn absolute(&self, file_path: &TrackedPath) -> PathBuf {
        self.path.join(file_path.as_path())
    }

    fn is_directory(&self, relative: &Path) -> anyhow::Result<bool> {
        match std::fs::symlink_metadata(self.path.join(relative)) {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Failed to inspect: {}", relative.display())),
        }
    }

    /// Whether something other than a directory (or a link to one) sits at `relative`
    fn is_non_directory(&self, relative: &Path) -> anyhow::Result<bool> {
        match std::fs::metadata(self.path.join(relative)) {
            Ok(metadata) => Ok(!metadata.is_dir()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Failed to inspect: {}", relative.display())),
        }
    }
}

fn conflict(path: &str, reason: &str) -> anyhow::Error {
    RepositoryError::WorkspaceConflict {
        path: path.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
