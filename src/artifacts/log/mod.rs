//! Commit history traversal
//!
//! History is a single parent chain ending at the root sentinel, so the walk is a
//! plain iterator that reads one commit per step and stops at the root or after
//! the requested number of entries.

pub mod rev_list;
