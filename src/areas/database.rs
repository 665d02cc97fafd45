//! Commit store
//!
//! Each commit lives in its own directory under `commits/`, named by its
//! identifier. A new commit is assembled in a hidden staging directory next to
//! its final location and renamed into place in one step, so a commit directory
//! is either complete or absent. Stored commits are never modified afterwards.

use crate::areas::index::Index;
use crate::artifacts::index::tracked_path::TrackedPath;
use crate::artifacts::objects::commit::{Commit, Snapshot};
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index";
const PARENT_FILE: &str = "prev";
const MESSAGE_FILE: &str = "msg";
const FILES_DIR: &str = "files";
const STAGING_PREFIX: &str = ".incoming-";

#[derive(Debug)]
pub struct Database {
    /// Path to the commits directory (`.trit/commits`)
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, id: &CommitId) -> bool {
        !id.is_root() && self.commit_path(id).is_dir()
    }

    /// Persist `commit` together with the file contents in `snapshot`
    pub fn store(&self, commit: &Commit, snapshot: &Snapshot) -> anyhow::Result<()> {
        let commit_path = self.commit_path(commit.id());

        if commit_path.exists() {
            anyhow::bail!("commit {} is already stored", commit.id());
        }

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&self.path)
            .with_context(|| format!("failed to stage commit {}", commit.id()))?;

        std::fs::write(
            staging.path().join(INDEX_FILE),
            Index::serialize_entries(commit.tracked()),
        )?;
        std::fs::write(staging.path().join(PARENT_FILE), commit.parent().as_ref())?;
        std::fs::write(staging.path().join(MESSAGE_FILE), commit.message())?;

        for (path, content) in snapshot.files() {
            let target = staging.path().join(FILES_DIR).join(path.as_path());
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&target, content)
                .with_context(|| format!("failed to store {} in commit {}", path, commit.id()))?;
        }

        // the staging directory is gone after the rename; dropping the guard is a no-op
        std::fs::rename(staging.path(), &commit_path)
            .with_context(|| format!("failed to publish commit {}", commit.id()))?;

        tracing::debug!(commit = %commit.id(), parent = %commit.parent(), files = snapshot.files().len(), "stored commit");

        Ok(())
    }

    pub fn load(&self, id: &CommitId) -> anyhow::Result<Commit> {
        if !self.exists(id) {
            return Err(RepositoryError::NoSuchCommit { id: id.to_string() }.into());
        }

        let commit_path = self.commit_path(id);
        let read = |name: &str| {
            std::fs::read_to_string(commit_path.join(name))
                .with_context(|| format!("failed to read {} of commit {}", name, id))
        };

        let tracked = Index::parse_entries(&read(INDEX_FILE)?)?;
        let parent = CommitId::try_parse(&read(PARENT_FILE)?)?;
        let message = read(MESSAGE_FILE)?;

        Ok(Commit::new(id.clone(), parent, message, tracked))
    }

    /// Read back every file recorded in `commit`, in index order
    pub fn load_snapshot(&self, commit: &Commit) -> anyhow::Result<Snapshot> {
        let files = commit
            .tracked()
            .iter()
            .map(|path| Ok((path.clone(), self.load_file(commit.id(), path)?)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Snapshot::new(files))
    }

    pub fn load_file(&self, id: &CommitId, path: &TrackedPath) -> anyhow::Result<Vec<u8>> {
        let stored = self.commit_path(id).join(FILES_DIR).join(path.as_path());

        std::fs::read(&stored).with_context(|| format!("failed to read {} from commit {}", path, id))
    }

    fn commit_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::commit_id::BranchNumber;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn database_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("commits")).unwrap();
        dir
    }

    fn database(dir: &TempDir) -> Database {
        Database::new(dir.path().join("commits").into_boxed_path())
    }

    fn sample_commit() -> (Commit, Snapshot) {
        let id = CommitId::root().next(BranchNumber::new(0).unwrap()).unwrap();
        let a = TrackedPath::try_parse("a.txt").unwrap();
        let nested = TrackedPath::try_parse("docs/b.txt").unwrap();

        let commit = Commit::new(
            id,
            CommitId::root(),
            "GO BEARS! first".to_string(),
            vec![a.clone(), nested.clone()],
        );
        let snapshot = Snapshot::new(vec![(a, b"alpha".to_vec()), (nested, b"beta".to_vec())]);

        (commit, snapshot)
    }

    #[rstest]
    fn stored_commit_loads_back(database_dir: TempDir) -> anyhow::Result<()> {
        let database = database(&database_dir);
        let (commit, snapshot) = sample_commit();

        database.store(&commit, &snapshot)?;
        let loaded = database.load(commit.id())?;

        assert_eq!(loaded, commit);
        assert!(loaded.is_first_commit());
        assert_eq!(database.load_snapshot(&loaded)?, snapshot);
        Ok(())
    }

    #[rstest]
    fn staging_directory_does_not_survive(database_dir: TempDir) -> anyhow::Result<()> {
        let database = database(&database_dir);
        let (commit, snapshot) = sample_commit();

        database.store(&commit, &snapshot)?;

        let entries = std::fs::read_dir(database.commits_path())?
            .map(|entry| Ok(entry?.file_name().to_string_lossy().to_string()))
            .collect::<anyhow::Result<Vec<_>>>()?;
        assert_eq!(entries, vec![commit.id().to_string()]);
        Ok(())
    }

    #[rstest]
    fn commits_are_never_overwritten(database_dir: TempDir) -> anyhow::Result<()> {
        let database = database(&database_dir);
        let (commit, snapshot) = sample_commit();
        database.store(&commit, &snapshot)?;

        assert!(database.store(&commit, &Snapshot::default()).is_err());
        assert_eq!(database.load_snapshot(&database.load(commit.id())?)?, snapshot);
        Ok(())
    }

    #[rstest]
    fn loading_unknown_commit_fails(database_dir: TempDir) {
        let database = database(&database_dir);
        let id = CommitId::root().next(BranchNumber::new(3).unwrap()).unwrap();

        let error = database.load(&id).unwrap_err();

        assert!(!database.exists(&id));
        assert!(!database.exists(&CommitId::root()));
        assert_eq!(
            RepositoryError::kind_of(&error),
            Some(&RepositoryError::NoSuchCommit { id: id.to_string() })
        );
    }
}
