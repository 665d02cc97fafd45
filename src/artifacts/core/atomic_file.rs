//! Atomic replacement of metadata files
//!
//! Every pointer, list and index file is rewritten by staging the new content in
//! a sibling temporary file and renaming it over the original. The original is
//! held under an exclusive lock for the whole replacement, and readers take a
//! shared lock on the same file, so a reader that opened the old file finishes
//! before it is swapped out. Readers see either the old or the new content,
//! never a torn write.

use anyhow::Context;
use file_guard::Lock;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

pub fn write_atomically(path: &Path, content: &[u8]) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("no parent directory for {:?}", path))?;
    std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create directory {:?}", parent))?;

    let mut target = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .with_context(|| format!("failed to open {:?}", path))?;
    let _lock = file_guard::lock(&mut target, Lock::Exclusive, 0, 1)?;

    let mut staged = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to stage a replacement for {:?}", path))?;
    staged.write_all(content)?;
    staged.as_file().sync_all()?;

    staged
        .persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace {:?}", path))?;

    Ok(())
}

/// Read a metadata file under a shared lock
pub fn read_locked(path: &Path) -> anyhow::Result<String> {
    let mut file = std::fs::OpenOptions::new()
        .read(true)
        .open(path)
        .with_context(|| format!("failed to open {:?}", path))?;
    let mut lock = file_guard::lock(&mut file, Lock::Shared, 0, 1)?;

    let mut content = String::new();
    lock.deref_mut()
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read {:?}", path))?;

    Ok(content)
}
