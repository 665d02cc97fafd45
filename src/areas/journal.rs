//! In-flight operation marker
//!
//! Commit and checkout touch several files in sequence. Before the first write
//! they record their name in the journal file and they delete it after the last
//! one, so a run that stopped halfway leaves the journal behind and the next
//! invocation can tell the repository may be inconsistent.

use crate::artifacts::core::atomic_file::{read_locked, write_atomically};
use anyhow::Context;
use derive_new::new;
use std::path::Path;

#[derive(Debug, new)]
pub struct Journal {
    /// Path to the journal file (`.trit/journal`)
    path: Box<Path>,
}

impl Journal {
    /// Name of the operation that did not finish, if any
    pub fn pending(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        Ok(Some(read_locked(&self.path)?.trim().to_string()))
    }

    pub fn begin(&self, operation: &str) -> anyhow::Result<()> {
        tracing::debug!(operation, "journal opened");
        write_atomically(&self.path, operation.as_bytes())
    }

    pub fn finish(&self) -> anyhow::Result<()> {
        std::fs::remove_file(&self.path)
            .with_context(|| format!("failed to close journal at {:?}", self.path))?;
        tracing::debug!("journal closed");

        Ok(())
    }
}
