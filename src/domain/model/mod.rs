// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Time specification - an offset into the source timeline in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TimeSpec {
    pub seconds: f64,
}

impl TimeSpec {
    /// Create a new TimeSpec from seconds
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Create a new TimeSpec from hours, minutes, seconds, milliseconds
    pub fn from_components(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        let total_seconds = hours as f64 * 3600.0
            + minutes as f64 * 60.0
            + seconds as f64
            + milliseconds as f64 / 1000.0;
        Self {
            seconds: total_seconds,
        }
    }

    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// Parse `HH:MM:SS[.frac]`, `MM:SS[.frac]` or plain seconds.
    ///
    /// Leading components are unsigned integers, the last one is a real
    /// number. No upper bound is applied to any component.
    pub fn parse(time_str: &str) -> Result<Self, DomainError> {
        let trimmed = time_str.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();

        let Some((last, leading)) = parts.split_last() else {
            return Err(DomainError::parse(time_str, "empty timestamp"));
        };
        if parts.len() > 3 {
            return Err(DomainError::parse(
                time_str,
                "expected HH:MM:SS, MM:SS or seconds",
            ));
        }

        let mut total = 0.0;
        for (i, part) in leading.iter().enumerate() {
            let value = part.trim().parse::<u64>().map_err(|_| {
                DomainError::parse(time_str, format!("'{}' is not a whole number", part))
            })?;
            let weight = 60f64.powi((leading.len() - i) as i32);
            total += value as f64 * weight;
        }

        let last = last.trim();
        if last.starts_with('-') {
            return Err(DomainError::parse(time_str, "negative values are not allowed"));
        }
        let seconds = last
            .parse::<f64>()
            .map_err(|_| DomainError::parse(time_str, format!("'{}' is not a number", last)))?;
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(DomainError::parse(time_str, "seconds must be a finite, non-negative number"));
        }

        Ok(Self::from_seconds(total + seconds))
    }

    /// Format as HH:MM:SS.mmm, or MM:SS.mmm below one hour
    pub fn format_hms(&self) -> String {
        let total_ms = (self.seconds * 1000.0).round() as u64;
        let hours = total_ms / 3_600_000;
        let minutes = (total_ms % 3_600_000) / 60_000;
        let seconds = (total_ms % 60_000) / 1000;
        let milliseconds = total_ms % 1000;

        if hours > 0 {
            format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, milliseconds)
        } else {
            format!("{:02}:{:02}.{:03}", minutes, seconds, milliseconds)
        }
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_hms())
    }
}

/// Cut as supplied by a caller, before its timestamps are parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutInstruction {
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CutInstruction {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            reason: None,
        }
    }

    /// Parse the `START-END` shorthand used on the command line
    pub fn parse_shorthand(spec: &str) -> Result<Self, DomainError> {
        let (start, end) = spec.split_once('-').ok_or_else(|| {
            DomainError::parse(spec, "expected START-END, e.g. 00:10-00:25")
        })?;
        Ok(Self::new(start.trim(), end.trim()))
    }
}

/// Cut instruction document: `{ "cuts": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutInstructions {
    #[serde(default)]
    pub cuts: Vec<CutInstruction>,
}

/// Time range to remove from the source
#[derive(Debug, Clone, PartialEq)]
pub struct CutRange {
    pub start: TimeSpec,
    pub end: TimeSpec,
    /// Metadata only
    pub reason: Option<String>,
}

impl CutRange {
    /// Create a new cut range; `start` must be strictly before `end`
    pub fn new(start: TimeSpec, end: TimeSpec) -> Result<Self, DomainError> {
        if start.seconds >= end.seconds {
            return Err(DomainError::InvalidCutRange(format!(
                "start ({}) must be before end ({})",
                start, end
            )));
        }
        Ok(Self {
            start,
            end,
            reason: None,
        })
    }

    pub fn with_reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    /// Parse and validate a caller-supplied cut
    pub fn from_instruction(instruction: &CutInstruction) -> Result<Self, DomainError> {
        let start = TimeSpec::parse(&instruction.start)?;
        let end = TimeSpec::parse(&instruction.end)?;
        Ok(Self::new(start, end)?.with_reason(instruction.reason.clone()))
    }

    pub fn duration(&self) -> f64 {
        self.end.seconds - self.start.seconds
    }
}

/// Half-open interval `[start, end)` of the source that survives into the output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeepRange {
    pub start: f64,
    pub end: f64,
}

impl KeepRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl fmt::Display for KeepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            TimeSpec::from_seconds(self.start),
            TimeSpec::from_seconds(self.end)
        )
    }
}

/// Total playable length of a source file
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MediaDuration(f64);

impl MediaDuration {
    pub fn new(seconds: f64) -> Result<Self, DomainError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(DomainError::Probe(format!(
                "duration must be a finite, non-negative number, got {}",
                seconds
            )));
        }
        Ok(Self(seconds))
    }

    pub fn as_seconds(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for MediaDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TimeSpec::from_seconds(self.0))
    }
}

/// Per-job identifier; prefixes every working path of the job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request for one cut job
#[derive(Debug, Clone)]
pub struct CutRequest {
    /// `http(s)://` URL or local path
    pub source: String,
    pub cuts: Vec<CutInstruction>,
    /// Explicit output path; generated from the source name when absent
    pub output: Option<PathBuf>,
}

impl CutRequest {
    pub fn new(source: impl Into<String>, cuts: Vec<CutInstruction>) -> Self {
        Self {
            source: source.into(),
            cuts,
            output: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// Result record of a successful job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutReport {
    pub job_id: JobId,
    pub source: String,
    pub original_duration: f64,
    pub cuts_applied: usize,
    pub segments_kept: usize,
    pub kept_duration: f64,
    pub keep_ranges: Vec<KeepRange>,
    pub output_path: PathBuf,
    pub output_size: u64,
    /// Duration of the output as re-probed, when available
    pub output_duration: Option<f64>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
