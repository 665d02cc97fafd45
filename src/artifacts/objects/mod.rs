//! Commit identifiers and commit records
//!
//! - `commit_id`: identifier generation (branch segment + counter segment)
//! - `commit`: the immutable record stored for every commit

pub mod commit;
pub mod commit_id;

/// Length of a commit identifier in symbols
pub const COMMIT_ID_LENGTH: usize = 40;

/// Leading symbols encoding the branch number
pub const BRANCH_SEGMENT_LENGTH: usize = 10;

/// Trailing symbols encoding the per-lineage counter
pub const COUNTER_SEGMENT_LENGTH: usize = COMMIT_ID_LENGTH - BRANCH_SEGMENT_LENGTH;

/// Symbol repeated to form the root sentinel; outside the digit alphabet
pub const ROOT_SYMBOL: char = '0';

/// Digit symbols indexed by their base-3 value
pub const DIGIT_SYMBOLS: [char; 3] = ['6', '1', 'c'];

pub const SYMBOL_DIGITS: phf::Map<char, u64> = phf::phf_map! {
    '6' => 0,
    '1' => 1,
    'c' => 2,
};
