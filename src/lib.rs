//! A small single-user version control engine.
//!
//! The working tree's tracked files are staged in an index, snapshotted into
//! immutable commits, and organized into branches. HEAD is either attached to a
//! branch or detached at a commit, and checkout keeps the working tree in step
//! with whichever commit is checked out. All state is kept in flat files under
//! `.trit/`.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
