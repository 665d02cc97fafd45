//! Commit message validation
//!
//! A message is accepted only if it contains the watermark somewhere. The search
//! is a single left-to-right scan that keeps a cursor into the watermark; on a
//! mismatch the cursor falls back along a precomputed failure table (the longest
//! watermark prefix that is also a suffix of what matched so far), so overlapping
//! partial matches such as `GO GO BEARS!` are never skipped.

use crate::errors::RepositoryError;

/// Substring every commit message must contain
pub const WATERMARK: &str = "GO BEARS!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    pub fn try_parse(message: &str) -> anyhow::Result<Self> {
        if is_acceptable(message) {
            Ok(Self(message.to_string()))
        } else {
            Err(RepositoryError::InvalidMessage.into())
        }
    }
}

impl AsRef<str> for CommitMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn is_acceptable(message: &str) -> bool {
    WatermarkScanner::new(WATERMARK).is_found_in(message)
}

struct WatermarkScanner<'w> {
    pattern: &'w [u8],
    fallback: Vec<usize>,
}

impl<'w> WatermarkScanner<'w> {
    fn new(pattern: &'w str) -> Self {
        let pattern = pattern.as_bytes();
        let mut fallback = vec![0; pattern.len()];
        let mut matched = 0;

        for i in 1..pattern.len() {
            while matched > 0 && pattern[i] != pattern[matched] {
                matched = fallback[matched - 1];
            }
            if pattern[i] == pattern[matched] {
                matched += 1;
            }
            fallback[i] = matched;
        }

        Self { pattern, fallback }
    }

    fn is_found_in(&self, haystack: &str) -> bool {
        if self.pattern.is_empty() {
            return true;
        }

        let mut cursor = 0;
        for &byte in haystack.as_bytes() {
            while cursor > 0 && byte != self.pattern[cursor] {
                cursor = self.fallback[cursor - 1];
            }
            if byte == self.pattern[cursor] {
                cursor += 1;
            }
            if cursor == self.pattern.len() {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("GO BEARS!")]
    #[case("GO BEARS! first")]
    #[case("fixed the build, GO BEARS!")]
    #[case("GO GO BEARS!")]
    #[case("GGO BEARS!")]
    #[case("GO BEARGO BEARS!")]
    fn accepts_messages_containing_watermark(#[case] message: &str) {
        assert!(is_acceptable(message));
        assert!(CommitMessage::try_parse(message).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("GO BEARS")]
    #[case("go bears!")]
    #[case("GO  BEARS!")]
    #[case("G O BEARS!")]
    fn rejects_messages_without_watermark(#[case] message: &str) {
        let error = CommitMessage::try_parse(message).unwrap_err();

        assert_eq!(
            RepositoryError::kind_of(&error),
            Some(&RepositoryError::InvalidMessage)
        );
    }

    #[test]
    fn failure_table_handles_self_overlapping_patterns() {
        let scanner = WatermarkScanner::new("aab");

        assert!(scanner.is_found_in("aaab"));
        assert!(!scanner.is_found_in("abab"));
    }

    proptest! {
        #[test]
        fn agrees_with_substring_search(message in "[GO BEARS! ]{0,30}") {
            prop_assert_eq!(is_acceptable(&message), message.contains(WATERMARK));
        }
    }
}
