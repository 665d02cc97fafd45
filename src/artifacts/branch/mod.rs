pub mod branch_name;

use crate::artifacts::branch::branch_name::BranchName;
use derive_new::new;

/// Names a branch may not match: leading dot, `..`, `@{`, a `.lock` suffix,
/// slashes, whitespace/control characters and the revision punctuation
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\.\.|\/|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";

/// One line of the branch listing
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BranchListing {
    pub name: BranchName,
    pub is_current: bool,
}
