//! Error kinds reported by repository operations
//!
//! Every variant reflects a violated precondition rather than a transient fault,
//! so none of them is retried. Operations return `anyhow::Result` and raise these
//! kinds directly; callers recover them with `downcast_ref::<RepositoryError>()`.

use crate::artifacts::message::WATERMARK;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("File {path} already added")]
    AlreadyTracked { path: String },

    #[error("File {path} is not tracked")]
    NotTracked { path: String },

    #[error("Message must contain \"{}\"", WATERMARK)]
    InvalidMessage,

    #[error("Need to be on HEAD of a branch to commit")]
    DetachedHead,

    #[error("A branch named {name} already exists")]
    BranchExists { name: String },

    #[error("No branch {name} exists")]
    NoSuchBranch { name: String },

    #[error("Commit {id} does not exist")]
    NoSuchCommit { id: String },

    #[error("There are no commits!")]
    NoCommits,

    #[error("Malformed commit identifier '{value}'")]
    MalformedIdentifier { value: String },

    #[error("Invalid branch name '{name}'")]
    InvalidBranchName { name: String },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// The branch registry cannot hand out a number that fits the branch segment
    #[error("Cannot create branch {name}: at most {limit} branches are supported")]
    BranchLimitReached { name: String, limit: u64 },

    /// The counter segment would overflow on the next commit of this lineage
    #[error("Commit counter exhausted after {id}")]
    CounterExhausted { id: String },

    /// Something in the working tree stops a checkout from replacing a tracked file
    #[error("Cannot update {path}: {reason}")]
    WorkspaceConflict { path: String, reason: String },

    #[error("Not a trit repository: {path}")]
    NotARepository { path: String },

    #[error("Repository already initialized at {path}")]
    AlreadyInitialized { path: String },

    #[error("A previous '{operation}' did not finish; the repository may be inconsistent")]
    InterruptedOperation { operation: String },
}

impl RepositoryError {
    /// Extract the typed kind from an `anyhow` error, if it carries one
    pub fn kind_of(error: &anyhow::Error) -> Option<&RepositoryError> {
        error.downcast_ref::<RepositoryError>()
    }
}
