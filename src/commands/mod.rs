//! Command implementations
//!
//! Each user-facing command is an `impl Repository` block under `porcelain`.
//! Commands return typed values for programmatic callers and write their
//! user-facing output to the repository's writer.

pub mod porcelain;
