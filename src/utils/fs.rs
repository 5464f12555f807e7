//! Filesystem utilities.
//!
//! Helper functions for file operations.

use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use crate::error::Result;

/// A directory entry, as seen by the course sweeps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

/// Immediate children of `dir`, sorted by name. Symlinks are followed so a
/// linked module folder counts as a directory.
///
/// Only failing to read `dir` itself is an error. A dangling symlink is
/// listed as a non-directory entry and any other unreadable child is skipped.
pub fn list_entries(dir: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => entries.push(Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type().is_dir(),
            }),
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                if let Some(entry) = unfollowed_entry(&err) {
                    entries.push(entry);
                } else {
                    warn!(error = %err, "skipping unreadable directory entry");
                }
            }
        }
    }
    Ok(entries)
}

/// Entry for a child that could not be followed, named by its own metadata.
fn unfollowed_entry(err: &walkdir::Error) -> Option<Entry> {
    let path = err.path()?;
    let metadata = std::fs::symlink_metadata(path).ok()?;
    let name = path.file_name()?.to_string_lossy().into_owned();
    Some(Entry {
        name,
        is_dir: metadata.is_dir(),
    })
}

/// Immediate subdirectories of `dir`, sorted by name.
pub fn list_dirs(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(list_entries(dir)?
        .into_iter()
        .filter(|entry| entry.is_dir)
        .map(|entry| entry.name)
        .collect())
}
