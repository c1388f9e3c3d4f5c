//! Segment extraction and joining
//!
//! Each keep range is stream-copied into its own scratch file, then all
//! scratch files are concatenated in order. Scratch files live in a fresh
//! temporary directory that is removed whether or not the join succeeds.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::engine::manifest::ConcatManifest;
use crate::ports::*;

const MANIFEST_NAME: &str = "concat.txt";

/// What the splicer produced
#[derive(Debug, Clone, PartialEq)]
pub struct SpliceSummary {
    pub segments: usize,
    pub output_size: u64,
}

/// Drives an [`ExecutePort`] to cut and rejoin a source file
pub struct SegmentSplicer {
    executor: Arc<dyn ExecutePort>,
}

impl SegmentSplicer {
    pub fn new(executor: Arc<dyn ExecutePort>) -> Self {
        Self { executor }
    }

    /// Write the concatenation of `ranges` of `source` to `output`.
    ///
    /// Scratch files go in a new directory under `scratch_root`. On any
    /// failure nothing is left at `output` by this call.
    pub async fn splice(
        &self,
        source: &Path,
        ranges: &[KeepRange],
        scratch_root: &Path,
        output: &Path,
    ) -> Result<SpliceSummary, DomainError> {
        if ranges.is_empty() {
            return Err(DomainError::EmptyResult(
                "no keep ranges to extract".to_string(),
            ));
        }

        tokio::fs::create_dir_all(scratch_root).await?;
        let scratch = tempfile::Builder::new()
            .prefix("scratch-")
            .tempdir_in(scratch_root)?;

        let result = self.extract_and_join(source, ranges, scratch.path(), output).await;

        if let Err(e) = scratch.close() {
            warn!(error = %e, "failed to remove scratch directory");
        }

        if let Err(err) = &result {
            if err.kind() == ErrorKind::ConcatenationError {
                remove_partial_output(output).await;
            }
        }

        result
    }

    async fn extract_and_join(
        &self,
        source: &Path,
        ranges: &[KeepRange],
        scratch_dir: &Path,
        output: &Path,
    ) -> Result<SpliceSummary, DomainError> {
        let extension = segment_extension(source);
        let total = ranges.len();
        let mut manifest = ConcatManifest::new();

        for (index, range) in ranges.iter().enumerate() {
            let name = format!("segment_{:04}.{}", index, extension);
            debug!(segment = index + 1, total, range = %range, "extracting segment");

            self.executor
                .extract_segment(source, range, &scratch_dir.join(&name))
                .await
                .map_err(|e| match e {
                    DomainError::Extraction(detail) => DomainError::Extraction(format!(
                        "segment {} of {} ({}): {}",
                        index + 1,
                        total,
                        range,
                        detail
                    )),
                    other => other,
                })?;

            manifest.push(name);
        }

        let manifest_path = scratch_dir.join(MANIFEST_NAME);
        manifest.write_to(&manifest_path).await?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        info!(segments = total, "joining segments");
        self.executor.concat_segments(&manifest_path, output).await?;

        let output_size = match tokio::fs::metadata(output).await {
            Ok(meta) if meta.len() > 0 => meta.len(),
            _ => {
                return Err(DomainError::Concatenation(
                    "joined output is missing or empty".to_string(),
                ))
            }
        };

        Ok(SpliceSummary {
            segments: total,
            output_size,
        })
    }
}

/// Scratch segments keep the source container
fn segment_extension(source: &Path) -> String {
    source
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "mp4".to_string())
}

async fn remove_partial_output(output: &Path) {
    match tokio::fs::remove_file(output).await {
        Ok(()) => debug!("removed partial output"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(error = %e, "failed to remove partial output"),
    }
}

/// Scratch directory root for a job
pub fn scratch_root(job_dir: &Path) -> PathBuf {
    job_dir.join("scratch")
}
