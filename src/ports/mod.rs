// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for media file probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Container-level duration of a local file.
    ///
    /// An unknown or zero duration is an error, never a value.
    async fn probe_duration(&self, file_path: &Path) -> Result<MediaDuration, DomainError>;
}

/// Port for the external media tool's stream-copy operations
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Copy `range` of `source` into `destination` without re-encoding
    async fn extract_segment(
        &self,
        source: &Path,
        range: &KeepRange,
        destination: &Path,
    ) -> Result<(), DomainError>;

    /// Merge the files listed in a concat `manifest` into `destination`
    async fn concat_segments(&self, manifest: &Path, destination: &Path) -> Result<(), DomainError>;
}

/// Source file placed in a job's working directory
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedSource {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Port for retrieving a source video into local working storage
#[async_trait]
pub trait FetchPort: Send + Sync {
    /// Retrieve `source` (URL or local path) into `dest_dir`
    async fn fetch(&self, source: &str, dest_dir: &Path) -> Result<FetchedSource, DomainError>;
}
