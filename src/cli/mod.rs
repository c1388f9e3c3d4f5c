//! CLI module for Splicer
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// Splicer - remove time ranges from a video and stitch the rest together
///
/// Cuts are applied with stream copy, so boundaries snap to the keyframes
/// the container allows.
#[derive(Parser, Debug)]
#[command(name = "splicer")]
#[command(about = "Splicer - cut time ranges out of a video without re-encoding")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (TOML with a [splicer] table)
    #[arg(long, global = true, env = "SPLICER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format (pretty or json)
    #[arg(long, default_value = "pretty", global = true)]
    pub log_format: String,

    /// Root directory for per-job working files
    #[arg(long, global = true)]
    pub work_dir: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove time ranges from a video and write the rejoined result
    Cut(args::CutArgs),
    /// Show which ranges would be kept, without touching any media
    Plan(args::PlanArgs),
    /// Print the duration of a local media file
    Probe(args::ProbeArgs),
}
