// Adapters - External system implementations

pub mod command_runner;
pub mod exec_ffmpeg;
pub mod fetch_http;
pub mod probe_ffprobe;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use command_runner::CommandRunner;
pub use exec_ffmpeg::FFmpegAdapter;
pub use fetch_http::HttpFetchAdapter;
pub use probe_ffprobe::FFprobeAdapter;
pub use toml_config::{SplicerConfig, TomlConfigAdapter};
pub use tracing_log::{LogFormat, TracingLogAdapter};
