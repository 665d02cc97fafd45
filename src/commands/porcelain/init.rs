use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::atomic_file::write_atomically;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;

impl Repository {
    /// Create an empty repository: no tracked files, only `master`, no commits
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(RepositoryError::AlreadyInitialized {
                path: self.path().display().to_string(),
            }
            .into());
        }

        fs::create_dir_all(self.database().commits_path())
            .context("Failed to create .trit/commits directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .trit/heads directory")?;

        let master = BranchName::default_branch();
        let root = CommitId::root();

        write_atomically(self.index().path(), b"").context("Failed to create .trit/index")?;
        write_atomically(&self.refs().branches_path(), format!("{master}\n").as_bytes())
            .context("Failed to create .trit/branches")?;
        self.refs()
            .write_branch_head(&master, &root)
            .context("Failed to create head of the default branch")?;
        self.refs()
            .write_current_branch(Some(&master))
            .context("Failed to attach HEAD to the default branch")?;
        self.refs()
            .write_prev(&root)
            .context("Failed to create .trit/prev")?;

        tracing::debug!(path = %self.path().display(), "initialized repository");

        Ok(())
    }
}
