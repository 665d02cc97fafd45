//! Porcelain commands
//!
//! - `init`: create an empty repository
//! - `add` / `rm`: change the index
//! - `status`: list tracked files
//! - `commit`: snapshot the index into a new commit
//! - `branch`: list branches
//! - `checkout`: switch branches or detach at a commit
//! - `log`: walk history from the current commit

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod rm;
pub mod status;
