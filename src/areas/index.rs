//! Index (staging set)
//!
//! The index is the ordered, duplicate-free list of paths tracked in the current
//! working state. Order is insertion order. It is persisted as plain text, one
//! path per line, and the same text is copied into every commit.
//!
//! The in-memory copy is loaded with [`Index::rehydrate`] and written back with
//! [`Index::write_updates`], which replaces the file atomically and skips the
//! write entirely when nothing changed.

use crate::artifacts::core::atomic_file::{read_locked, write_atomically};
use crate::artifacts::index::INDEX_LINE_SEPARATOR;
use crate::artifacts::index::tracked_path::TrackedPath;
use crate::errors::RepositoryError;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.trit/index`)
    path: Box<Path>,
    entries: Vec<TrackedPath>,
    /// Set when the entries differ from what is on disk
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk, discarding any unsaved changes
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        let content = read_locked(&self.path)?;

        self.entries = Self::parse_entries(&content)?;
        self.changed = false;

        Ok(())
    }

    pub fn contains(&self, path: &TrackedPath) -> bool {
        self.entries.contains(path)
    }

    /// Append `path`; fails if it is already tracked
    pub fn add(&mut self, path: TrackedPath) -> anyhow::Result<()> {
        if self.contains(&path) {
            return Err(RepositoryError::AlreadyTracked {
                path: path.to_string(),
            }
            .into());
        }

        self.entries.push(path);
        self.changed = true;

        Ok(())
    }

    /// Drop `path`; fails if it is not tracked
    pub fn remove(&mut self, path: &TrackedPath) -> anyhow::Result<()> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry == path)
            .ok_or_else(|| RepositoryError::NotTracked {
                path: path.to_string(),
            })?;

        self.entries.remove(position);
        self.changed = true;

        Ok(())
    }

    /// Replace every entry at once, handing back the previous entries
    pub fn reset_to(&mut self, entries: Vec<TrackedPath>) -> Vec<TrackedPath> {
        self.changed = true;
        std::mem::replace(&mut self.entries, entries)
    }

    pub fn entries(&self) -> &[TrackedPath] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        write_atomically(&self.path, Self::serialize_entries(&self.entries).as_bytes())?;
        self.changed = false;

        Ok(())
    }

    pub fn serialize_entries(entries: &[TrackedPath]) -> String {
        entries
            .iter()
            .map(|entry| format!("{entry}{INDEX_LINE_SEPARATOR}"))
            .collect()
    }

    pub fn parse_entries(content: &str) -> anyhow::Result<Vec<TrackedPath>> {
        content
            .split(INDEX_LINE_SEPARATOR)
            .filter(|line| !line.is_empty())
            .map(TrackedPath::try_parse)
            .collect()
    }
}
