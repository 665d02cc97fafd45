use crate::areas::repository::Repository;
use crate::artifacts::checkout::head::Head;
use crate::artifacts::message::CommitMessage;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;

const OPERATION: &str = "commit";

impl Repository {
    /// Snapshot the index into a new commit on the attached branch
    ///
    /// Everything the commit needs, including the content of every tracked
    /// file, is read before the first write.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<CommitId> {
        self.ensure_writable()?;

        let message = CommitMessage::try_parse(message)?;

        let (branch, parent) = match self.refs().read_head()? {
            Head::OnBranch { branch, commit } => (branch, commit),
            Head::Detached(_) => return Err(RepositoryError::DetachedHead.into()),
        };
        let branch_number = self.refs().branch_number(branch.as_ref())?.ok_or_else(|| {
            RepositoryError::NoSuchBranch {
                name: branch.to_string(),
            }
        })?;
        let commit_id = parent.next(branch_number)?;

        let tracked = {
            let mut index = self.index();
            index.rehydrate()?;
            index.entries().to_vec()
        };
        let snapshot = self.workspace().snapshot(&tracked)?;
        let commit = Commit::new(
            commit_id.clone(),
            parent,
            message.as_ref().to_string(),
            tracked,
        );

        self.journal().begin(OPERATION)?;
        self.database().store(&commit, &snapshot)?;
        self.refs().write_prev(&commit_id)?;
        self.refs().write_branch_head(&branch, &commit_id)?;
        self.journal().finish()?;

        tracing::debug!(commit = %commit_id, branch = %branch, "created commit");

        Ok(commit_id)
    }
}
