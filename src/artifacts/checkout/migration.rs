//! Checkout migration
//!
//! A checkout first reads everything it needs (the target commit's index and the
//! stored copy of every file in it) and only then touches the working tree.
//! `Migration` is that fully-read plan: the paths to delete, the files to
//! restore, and the commit the working tree will reflect afterwards.

use crate::artifacts::index::tracked_path::TrackedPath;
use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::commit_id::CommitId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// Paths tracked by the current index; all of them are deleted
    removals: Vec<TrackedPath>,
    /// Commit the working tree reflects once the migration is applied
    target: CommitId,
    /// Files of the target commit, written after the removals
    restores: Snapshot,
}

impl Migration {
    pub fn plan(current: Vec<TrackedPath>, target: CommitId, restores: Snapshot) -> Self {
        Migration {
            removals: current,
            target,
            restores,
        }
    }

    pub fn removals(&self) -> &[TrackedPath] {
        &self.removals
    }

    pub fn target(&self) -> &CommitId {
        &self.target
    }

    pub fn restores(&self) -> &Snapshot {
        &self.restores
    }

    /// Index the working tree ends up with
    pub fn target_index(&self) -> Vec<TrackedPath> {
        self.restores.tracked()
    }
}
