//! Concat-demuxer manifest

use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;

/// Ordered list of segment files for ffmpeg's concat demuxer.
///
/// Entries are written as given; relative entries resolve against the
/// manifest's own directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConcatManifest {
    entries: Vec<PathBuf>,
}

impl ConcatManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<PathBuf>) {
        self.entries.push(entry.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One `file '<entry>'` line per segment, in insertion order
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("file '{}'\n", escape_entry(&entry.to_string_lossy())))
            .collect()
    }

    pub async fn write_to(&self, path: &Path) -> Result<(), DomainError> {
        tokio::fs::write(path, self.render()).await?;
        Ok(())
    }
}

/// Close the quote, emit an escaped quote, reopen
fn escape_entry(entry: &str) -> String {
    entry.replace('\'', "'\\''")
}
