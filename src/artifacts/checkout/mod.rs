//! Checkout state
//!
//! - `head`: the attached/detached HEAD state machine
//! - `migration`: the read-first plan that moves the working tree to a commit

pub mod head;
pub mod migration;
