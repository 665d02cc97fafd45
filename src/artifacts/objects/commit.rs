//! Commit records
//!
//! A commit is an immutable snapshot stored under its identifier:
//!
//! ```text
//! commits/<id>/
//!   index          tracked paths at commit time, one per line
//!   prev           identifier of the parent (possibly the root sentinel)
//!   msg            the commit message
//!   files/<path>   copy of every tracked file
//! ```
//!
//! `Commit` carries the metadata; file contents travel separately as a
//! [`Snapshot`] so that history walks never read them.

use crate::artifacts::index::tracked_path::TrackedPath;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    id: CommitId,
    parent: CommitId,
    message: String,
    tracked: Vec<TrackedPath>,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn parent(&self) -> &CommitId {
        &self.parent
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tracked(&self) -> &[TrackedPath] {
        &self.tracked
    }

    pub fn is_first_commit(&self) -> bool {
        self.parent.is_root()
    }
}

/// Tracked paths paired with the file contents recorded for them, in index order
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Snapshot {
    files: Vec<(TrackedPath, Vec<u8>)>,
}

impl Snapshot {
    pub fn files(&self) -> &[(TrackedPath, Vec<u8>)] {
        &self.files
    }

    pub fn tracked(&self) -> Vec<TrackedPath> {
        self.files.iter().map(|(path, _)| path.clone()).collect()
    }
}
