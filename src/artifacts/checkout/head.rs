use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;

/// The current position of the working tree
///
/// Persisted as two files: `current_branch` (empty when detached) and `prev`
/// (the commit the working tree reflects). While attached, `prev` is also the
/// head of the attached branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    OnBranch { branch: BranchName, commit: CommitId },
    Detached(CommitId),
}

impl Head {
    pub fn commit(&self) -> &CommitId {
        match self {
            Head::OnBranch { commit, .. } => commit,
            Head::Detached(commit) => commit,
        }
    }

    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            Head::OnBranch { branch, .. } => Some(branch),
            Head::Detached(_) => None,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached(_))
    }
}

impl std::fmt::Display for Head {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Head::OnBranch { branch, commit } => write!(f, "{branch} at {commit}"),
            Head::Detached(commit) => write!(f, "detached at {commit}"),
        }
    }
}
