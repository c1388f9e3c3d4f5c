//! Command runner for external media tools
//!
//! Every invocation is an async child process bounded by a timeout. The
//! child is killed when the timeout fires.

use std::ffi::OsString;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Captured result of a finished tool invocation
#[derive(Debug)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Last non-empty stderr lines, for logs
    pub fn stderr_tail(&self, lines: usize) -> String {
        let collected: Vec<&str> = self
            .stderr
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        let start = collected.len().saturating_sub(lines);
        collected[start..].join(" | ")
    }
}

/// Reasons a tool produced no exit status
#[derive(Error, Debug)]
pub enum ToolFailure {
    #[error("could not start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} timed out after {}s", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },
}

/// Runs one external program at a time with a fixed timeout
#[derive(Debug, Clone)]
pub struct CommandRunner {
    timeout: Duration,
}

impl CommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `program` with `args` and capture its output
    pub async fn run(&self, program: &str, args: &[OsString]) -> Result<ToolOutput, ToolFailure> {
        debug!(program, args = ?args, "running external tool");

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, child).await {
            Ok(result) => result.map_err(|source| ToolFailure::Spawn {
                program: program.to_string(),
                source,
            })?,
            Err(_) => {
                return Err(ToolFailure::TimedOut {
                    program: program.to_string(),
                    timeout: self.timeout,
                })
            }
        };

        Ok(ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
