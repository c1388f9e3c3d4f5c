//! FFprobe adapter for media duration probing
//!
//! Only the container-level `format=duration` entry is requested.

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::adapters::command_runner::CommandRunner;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    program: String,
    runner: CommandRunner,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(program: impl Into<String>, runner: CommandRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    fn build_args(file_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        args.push(file_path.as_os_str().to_owned());
        args
    }
}

/// Parse ffprobe's single-line duration output.
///
/// `N/A`, blank output and zero all mean the duration is unknown.
pub fn parse_duration_output(stdout: &str) -> Result<MediaDuration, DomainError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| DomainError::Probe("ffprobe reported no duration".to_string()))?;

    let seconds: f64 = line
        .parse()
        .map_err(|_| DomainError::Probe(format!("unexpected duration value '{}'", line)))?;

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(DomainError::Probe(format!("unusable duration value '{}'", line)));
    }

    MediaDuration::new(seconds)
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_duration(&self, file_path: &Path) -> Result<MediaDuration, DomainError> {
        if !file_path.is_file() {
            return Err(DomainError::Probe("input file does not exist".to_string()));
        }

        let output = self
            .runner
            .run(&self.program, &Self::build_args(file_path))
            .await
            .map_err(|e| DomainError::Probe(e.to_string()))?;

        if !output.success() {
            warn!(stderr = %output.stderr_tail(5), "ffprobe failed");
            return Err(DomainError::Probe(format!("ffprobe exited with {}", output.status)));
        }

        let duration = parse_duration_output(&output.stdout)?;
        debug!(seconds = duration.as_seconds(), "probed duration");
        Ok(duration)
    }
}
