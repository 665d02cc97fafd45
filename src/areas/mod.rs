//! Persisted repository areas
//!
//! - `database`: commit store, one immutable directory per commit
//! - `index`: staging set of tracked paths
//! - `journal`: marker for multi-step operations in flight
//! - `refs`: branch registry, branch heads, `prev` and `current_branch`
//! - `repository`: the handle tying the areas to one work tree
//! - `workspace`: working tree file operations

pub mod database;
pub mod index;
pub mod journal;
pub mod refs;
pub mod repository;
pub mod workspace;
