//! Commit identifiers
//!
//! A commit identifier is a 40-symbol string over a three-symbol alphabet
//! (`6` = 0, `1` = 1, `c` = 2). It is made of two base-3 numbers, both written
//! least-significant symbol first:
//!
//! ```text
//! | branch segment (10) | counter segment (30)            |
//!   1666666666            1666666666666666666666666666666
//!   branch #1             counter 1
//! ```
//!
//! The branch segment keeps identifiers produced on different branches apart even
//! when they share a parent; the counter grows by one per commit along a lineage.
//! Forty `0` characters form the root sentinel that stands for "no commit yet".

use crate::artifacts::objects::{
    BRANCH_SEGMENT_LENGTH, COMMIT_ID_LENGTH, COUNTER_SEGMENT_LENGTH, DIGIT_SYMBOLS, ROOT_SYMBOL,
    SYMBOL_DIGITS,
};
use crate::errors::RepositoryError;

/// Number of distinct branch numbers the branch segment can hold (3^10)
pub const MAX_BRANCHES: u64 = 3u64.pow(BRANCH_SEGMENT_LENGTH as u32);

/// Number of distinct counters the counter segment can hold (3^30)
pub const MAX_COUNTER: u64 = 3u64.pow(COUNTER_SEGMENT_LENGTH as u32);

/// Position of a branch in the registry, bounded by what the branch segment can encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchNumber(u64);

impl BranchNumber {
    pub fn new(position: u64) -> Option<Self> {
        (position < MAX_BRANCHES).then_some(Self(position))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// The sentinel standing before the first commit of every history
    pub fn root() -> Self {
        Self(ROOT_SYMBOL.to_string().repeat(COMMIT_ID_LENGTH))
    }

    pub fn is_root(&self) -> bool {
        self.0.chars().all(|c| c == ROOT_SYMBOL)
    }

    /// Whether `candidate` has the shape of a real commit identifier
    ///
    /// The root sentinel is not commit-shaped.
    pub fn is_commit_shaped(candidate: &str) -> bool {
        candidate.chars().count() == COMMIT_ID_LENGTH
            && candidate.chars().all(|c| SYMBOL_DIGITS.contains_key(&c))
    }

    /// Parse an identifier read from storage or given by the user
    ///
    /// Accepts commit-shaped identifiers and the root sentinel.
    pub fn try_parse(id: &str) -> anyhow::Result<Self> {
        let id = id.trim();
        let candidate = Self(id.to_string());

        if Self::is_commit_shaped(id) || (id.len() == COMMIT_ID_LENGTH && candidate.is_root()) {
            Ok(candidate)
        } else {
            Err(RepositoryError::MalformedIdentifier {
                value: id.to_string(),
            }
            .into())
        }
    }

    pub fn branch_number(&self) -> Option<BranchNumber> {
        if self.is_root() {
            return None;
        }

        decode(&self.0[..BRANCH_SEGMENT_LENGTH]).and_then(BranchNumber::new)
    }

    pub fn counter(&self) -> Option<u64> {
        if self.is_root() {
            return None;
        }

        decode(&self.0[BRANCH_SEGMENT_LENGTH..])
    }

    /// Derive the identifier of the commit that follows this one on `branch`
    ///
    /// The branch segment comes from `branch` alone; the counter is this
    /// identifier's counter plus one. The root sentinel counts as one before zero.
    pub fn next(&self, branch: BranchNumber) -> anyhow::Result<Self> {
        let counter = if self.is_root() {
            0
        } else {
            self.counter()
                .ok_or_else(|| RepositoryError::MalformedIdentifier {
                    value: self.0.clone(),
                })?
                + 1
        };

        if counter >= MAX_COUNTER {
            return Err(RepositoryError::CounterExhausted {
                id: self.0.clone(),
            }
            .into());
        }

        let mut id = encode(branch.value(), BRANCH_SEGMENT_LENGTH);
        id.push_str(&encode(counter, COUNTER_SEGMENT_LENGTH));

        Ok(Self(id))
    }
}

fn encode(mut value: u64, width: usize) -> String {
    (0..width)
        .map(|_| {
            let symbol = DIGIT_SYMBOLS[(value % 3) as usize];
            value /= 3;
            symbol
        })
        .collect()
}

fn decode(segment: &str) -> Option<u64> {
    segment.chars().rev().try_fold(0u64, |acc, symbol| {
        let digit = SYMBOL_DIGITS.get(&symbol)?;
        acc.checked_mul(3)?.checked_add(*digit)
    })
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
