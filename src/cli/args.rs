//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the cut command
#[derive(Args, Debug)]
pub struct CutArgs {
    /// Source video: http(s) URL or local path
    #[arg(short, long)]
    pub input: String,

    /// JSON or YAML file with a `cuts` list
    #[arg(long)]
    pub cuts_file: Option<PathBuf>,

    /// Range to remove as START-END (HH:MM:SS.ms, MM:SS.ms, or seconds); repeatable
    #[arg(short, long = "cut")]
    pub cut: Vec<String>,

    /// Output file path (default: generated in the output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Timeout in seconds for each ffmpeg/ffprobe invocation
    #[arg(long)]
    pub tool_timeout: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Total duration of the source (HH:MM:SS.ms, MM:SS.ms, or seconds)
    #[arg(short, long)]
    pub duration: String,

    /// JSON or YAML file with a `cuts` list
    #[arg(long)]
    pub cuts_file: Option<PathBuf>,

    /// Range to remove as START-END; repeatable
    #[arg(short, long = "cut")]
    pub cut: Vec<String>,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the probe command
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Local media file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
