//! HEAD transitions
//!
//! ```text
//!                 checkout <branch>            checkout <commit-id>
//!   OnBranch(a) ─────────────────▶ OnBranch(b)  ─────────────────▶ Detached(id)
//!        ▲                                                              │
//!        └──────────────────────── checkout <branch> ───────────────────┘
//! ```
//!
//! Arriving at a commit deletes every file of the current index and restores the
//! index and files recorded in the target commit (the root sentinel restores
//! nothing). Only then is the branch being left saved at its old position and a
//! `-b` branch registered. Everything that can be rejected is checked before the
//! first write.

use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::head::Head;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;

const OPERATION: &str = "checkout";

impl Repository {
    /// Switch to a branch, or detach at a commit when `target` is a commit identifier
    ///
    /// With `create_new`, `target` names a branch to register at the current
    /// position before switching to it.
    pub fn checkout(&mut self, target: &str, create_new: bool) -> anyhow::Result<Head> {
        self.ensure_writable()?;

        let current = self.refs().read_head()?;
        let new_branch = self.resolve_new_branch(target, create_new)?;
        let next = self.resolve_checkout_target(target, &current, new_branch.as_ref())?;
        let migration = self.plan_migration(next.commit())?;

        self.journal().begin(OPERATION)?;
        self.apply_checkout(&migration)?;
        if let Head::OnBranch { branch, commit } = &current {
            self.refs().write_branch_head(branch, commit)?;
        }
        if let Some(branch) = &new_branch {
            self.refs().create_branch(branch, current.commit())?;
        }
        self.refs().write_current_branch(next.branch())?;
        self.journal().finish()?;

        tracing::debug!(from = %current, to = %next, "checked out");

        Ok(next)
    }

    /// The branch `-b` asks for, checked against the registry without writing anything
    fn resolve_new_branch(
        &self,
        target: &str,
        create_new: bool,
    ) -> anyhow::Result<Option<BranchName>> {
        if CommitId::is_commit_shaped(target) {
            return Ok(None);
        }

        let exists = self.refs().branch_number(target)?.is_some();
        match (exists, create_new) {
            (true, true) => Err(RepositoryError::BranchExists {
                name: target.to_string(),
            }
            .into()),
            (false, false) => Err(RepositoryError::NoSuchBranch {
                name: target.to_string(),
            }
            .into()),
            (false, true) => {
                let branch = BranchName::try_parse(target)?;
                self.refs().next_branch_number(&branch)?;
                Ok(Some(branch))
            }
            (true, false) => Ok(None),
        }
    }

    fn resolve_checkout_target(
        &self,
        target: &str,
        current: &Head,
        new_branch: Option<&BranchName>,
    ) -> anyhow::Result<Head> {
        if CommitId::is_commit_shaped(target) {
            let commit = CommitId::try_parse(target)?;
            if !self.database().exists(&commit) {
                return Err(RepositoryError::NoSuchCommit {
                    id: target.to_string(),
                }
                .into());
            }

            return Ok(Head::Detached(commit));
        }

        if let Some(branch) = new_branch {
            return Ok(Head::OnBranch {
                branch: branch.clone(),
                commit: current.commit().clone(),
            });
        }

        let branch = BranchName::try_parse(target)?;
        // the branch being left has not been saved yet; its live position is `prev`
        let commit = if current.branch() == Some(&branch) {
            current.commit().clone()
        } else {
            self.refs().read_branch_head(&branch)?
        };

        Ok(Head::OnBranch { branch, commit })
    }

    fn plan_migration(&self, target: &CommitId) -> anyhow::Result<Migration> {
        let current = {
            let mut index = self.index();
            index.rehydrate()?;
            index.entries().to_vec()
        };

        let restores = if target.is_root() {
            Snapshot::default()
        } else {
            let commit = self.database().load(target)?;
            self.database().load_snapshot(&commit)?
        };

        let migration = Migration::plan(current, target.clone(), restores);
        self.workspace().verify_migration(&migration)?;

        Ok(migration)
    }

    fn apply_checkout(&self, migration: &Migration) -> anyhow::Result<()> {
        self.workspace().apply_migration(migration)?;

        let mut index = self.index();
        index.reset_to(migration.target_index());
        index.write_updates()?;

        self.refs().write_prev(migration.target())
    }
}
