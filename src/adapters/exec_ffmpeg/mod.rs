//! FFmpeg execution adapter
//!
//! Stream-copy extraction and concat-demuxer joins through the `ffmpeg`
//! command-line tool. Nothing is re-encoded, so extraction boundaries snap
//! to whatever the copy mode allows (usually the preceding keyframe).

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tracing::warn;

use crate::adapters::command_runner::CommandRunner;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    program: String,
    runner: CommandRunner,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new(program: impl Into<String>, runner: CommandRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    fn common_args() -> Vec<OsString> {
        ["-hide_banner", "-loglevel", "error", "-y"]
            .iter()
            .map(OsString::from)
            .collect()
    }

    pub(crate) fn extract_args(source: &Path, range: &KeepRange, destination: &Path) -> Vec<OsString> {
        let mut args = Self::common_args();
        args.push("-ss".into());
        args.push(format_seconds(range.start).into());
        args.push("-i".into());
        args.push(source.as_os_str().to_owned());
        args.push("-t".into());
        args.push(format_seconds(range.duration()).into());
        for arg in ["-c", "copy", "-avoid_negative_ts", "make_zero"] {
            args.push(arg.into());
        }
        args.push(destination.as_os_str().to_owned());
        args
    }

    pub(crate) fn concat_args(manifest: &Path, destination: &Path) -> Vec<OsString> {
        let mut args = Self::common_args();
        for arg in ["-f", "concat", "-safe", "0", "-i"] {
            args.push(arg.into());
        }
        args.push(manifest.as_os_str().to_owned());
        args.push("-c".into());
        args.push("copy".into());
        args.push(destination.as_os_str().to_owned());
        args
    }
}

/// Seconds with millisecond precision, as ffmpeg accepts them
fn format_seconds(seconds: f64) -> String {
    format!("{:.3}", seconds)
}

#[async_trait]
impl ExecutePort for FFmpegAdapter {
    async fn extract_segment(
        &self,
        source: &Path,
        range: &KeepRange,
        destination: &Path,
    ) -> Result<(), DomainError> {
        let output = self
            .runner
            .run(&self.program, &Self::extract_args(source, range, destination))
            .await
            .map_err(|e| DomainError::Extraction(e.to_string()))?;

        if !output.success() {
            warn!(range = %range, stderr = %output.stderr_tail(5), "ffmpeg extraction failed");
            return Err(DomainError::Extraction(format!(
                "ffmpeg exited with {}",
                output.status
            )));
        }
        Ok(())
    }

    async fn concat_segments(&self, manifest: &Path, destination: &Path) -> Result<(), DomainError> {
        let output = self
            .runner
            .run(&self.program, &Self::concat_args(manifest, destination))
            .await
            .map_err(|e| DomainError::Concatenation(e.to_string()))?;

        if !output.success() {
            warn!(stderr = %output.stderr_tail(5), "ffmpeg concatenation failed");
            return Err(DomainError::Concatenation(format!(
                "ffmpeg exited with {}",
                output.status
            )));
        }
        Ok(())
    }
}
