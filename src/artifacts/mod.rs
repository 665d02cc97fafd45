//! Value types and algorithms
//!
//! - `branch`: branch names and registry listings
//! - `checkout`: HEAD state and checkout migrations
//! - `core`: atomic metadata files and output paging
//! - `index`: tracked paths
//! - `log`: parent-chain traversal
//! - `message`: commit message watermark check
//! - `objects`: commit identifiers and commit records

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod message;
pub mod objects;
