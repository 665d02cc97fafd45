//! Shared I/O helpers
//!
//! - `atomic_file`: whole-file replacement and locked reads for metadata files
//! - `pager`: routing long command output through the `minus` pager

pub mod atomic_file;
pub mod pager;
