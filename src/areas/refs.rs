//! Branch registry and HEAD pointers
//!
//! All of these are small text files under the metadata directory:
//!
//! - `prev`: commit identifier the working tree currently reflects
//! - `current_branch`: attached branch name, empty when HEAD is detached
//! - `branches`: registry of branch names, one per line, in creation order
//! - `heads/<branch>`: head pointer slot of each branch
//!
//! A branch's line number in the registry is its branch number, which is baked
//! into every commit identifier produced on it. The registry is append-only, so
//! a number once handed out is never reused.

use crate::artifacts::branch::BranchListing;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::head::Head;
use crate::artifacts::core::atomic_file::{read_locked, write_atomically};
use crate::artifacts::objects::commit_id::{BranchNumber, CommitId, MAX_BRANCHES};
use crate::errors::RepositoryError;
use derive_new::new;
use std::path::Path;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (`.trit`)
    path: Box<Path>,
}

impl Refs {
    pub fn read_prev(&self) -> anyhow::Result<CommitId> {
        CommitId::try_parse(&read_locked(&self.prev_path())?)
    }

    pub fn write_prev(&self, id: &CommitId) -> anyhow::Result<()> {
        tracing::debug!(commit = %id, "moving prev pointer");
        write_atomically(&self.prev_path(), id.as_ref().as_bytes())
    }

    pub fn read_head(&self) -> anyhow::Result<Head> {
        let commit = self.read_prev()?;
        let current_branch = read_locked(&self.current_branch_path())?;
        let current_branch = current_branch.trim();

        if current_branch.is_empty() {
            Ok(Head::Detached(commit))
        } else {
            Ok(Head::OnBranch {
                branch: BranchName::try_parse(current_branch)?,
                commit,
            })
        }
    }

    /// Record which branch is attached; `None` detaches HEAD
    pub fn write_current_branch(&self, branch: Option<&BranchName>) -> anyhow::Result<()> {
        let content = branch.map(|branch| branch.as_ref()).unwrap_or_default();
        write_atomically(&self.current_branch_path(), content.as_bytes())
    }

    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        Ok(read_locked(&self.branches_path())?
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Registry listing with the attached branch (if any) marked
    pub fn branch_listing(&self) -> anyhow::Result<Vec<BranchListing>> {
        let head = self.read_head()?;

        self.list_branches()?
            .into_iter()
            .map(|name| {
                let name = BranchName::try_parse(&name)?;
                let is_current = head.branch() == Some(&name);
                Ok(BranchListing::new(name, is_current))
            })
            .collect()
    }

    /// Creation-order position of `name`, or `None` if it was never registered
    pub fn branch_number(&self, name: &str) -> anyhow::Result<Option<BranchNumber>> {
        Ok(self
            .list_branches()?
            .iter()
            .position(|branch| branch == name)
            .and_then(|position| BranchNumber::new(position as u64)))
    }

    /// Number `name` would receive if it were registered now
    pub fn next_branch_number(&self, name: &BranchName) -> anyhow::Result<BranchNumber> {
        let branches = self.list_branches()?;

        if branches.iter().any(|branch| branch == name.as_ref()) {
            return Err(RepositoryError::BranchExists {
                name: name.to_string(),
            }
            .into());
        }

        BranchNumber::new(branches.len() as u64).ok_or_else(|| {
            RepositoryError::BranchLimitReached {
                name: name.to_string(),
                limit: MAX_BRANCHES,
            }
            .into()
        })
    }

    /// Append `name` to the registry and point its head at `at`
    pub fn create_branch(&self, name: &BranchName, at: &CommitId) -> anyhow::Result<BranchNumber> {
        let number = self.next_branch_number(name)?;
        let mut branches = self.list_branches()?;

        // the head slot goes first: a registered branch must always have one
        self.write_branch_head(name, at)?;

        branches.push(name.to_string());
        let content = branches
            .iter()
            .map(|branch| format!("{branch}\n"))
            .collect::<String>();
        write_atomically(&self.branches_path(), content.as_bytes())?;

        tracing::debug!(branch = %name, number = number.value(), at = %at, "registered branch");

        Ok(number)
    }

    pub fn read_branch_head(&self, name: &BranchName) -> anyhow::Result<CommitId> {
        let slot = self.head_slot_path(name);

        if !slot.exists() {
            return Err(RepositoryError::NoSuchBranch {
                name: name.to_string(),
            }
            .into());
        }

        CommitId::try_parse(&read_locked(&slot)?)
    }

    pub fn write_branch_head(&self, name: &BranchName, id: &CommitId) -> anyhow::Result<()> {
        tracing::debug!(branch = %name, commit = %id, "updating branch head");
        write_atomically(&self.head_slot_path(name), id.as_ref().as_bytes())
    }

    pub fn prev_path(&self) -> Box<Path> {
        self.path.join("prev").into_boxed_path()
    }

    pub fn current_branch_path(&self) -> Box<Path> {
        self.path.join("current_branch").into_boxed_path()
    }

    pub fn branches_path(&self) -> Box<Path> {
        self.path.join("branches").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.path.join("heads").into_boxed_path()
    }

    fn head_slot_path(&self, name: &BranchName) -> Box<Path> {
        self.heads_path().join(name.as_ref()).into_boxed_path()
    }
}
