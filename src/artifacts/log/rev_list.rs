use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;

/// Walk of the parent chain starting at a given commit
///
/// Lazy and finite; restarting means building a new walk from the same start.
#[derive(Clone)]
pub struct RevList<'r> {
    database: &'r Database,
    next_commit_id: CommitId,
    remaining: Option<usize>,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: CommitId, limit: Option<usize>) -> Self {
        RevList {
            database,
            next_commit_id: start,
            remaining: limit,
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_commit_id.is_root() || self.remaining == Some(0) {
            return None;
        }

        match self.database.load(&self.next_commit_id) {
            Ok(commit) => {
                self.next_commit_id = commit.parent().clone();
                self.remaining = self.remaining.map(|remaining| remaining - 1);
                Some(Ok(commit))
            }
            Err(e) => {
                // a broken chain ends the walk after reporting it once
                self.next_commit_id = CommitId::root();
                Some(Err(e))
            }
        }
    }
}
