// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::errors::*;

/// Config file locations tried when none is given explicitly
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["splicer.toml", "config/splicer.toml"];

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Runtime configuration for the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplicerConfig {
    /// Root under which every job gets its own directory
    pub work_dir: PathBuf,
    /// Where generated output names are placed
    pub output_dir: PathBuf,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    /// Upper bound for each ffmpeg/ffprobe invocation
    pub tool_timeout_secs: u64,
    /// Upper bound for downloading the source
    pub fetch_timeout_secs: u64,
    pub log_level: String,
}

impl Default for SplicerConfig {
    fn default() -> Self {
        Self {
            work_dir: std::env::temp_dir().join("splicer"),
            output_dir: PathBuf::from("."),
            ffmpeg_path: "ffmpeg".to_string(),
            ffprobe_path: "ffprobe".to_string(),
            tool_timeout_secs: 600,
            fetch_timeout_secs: 300,
            log_level: "info".to_string(),
        }
    }
}

impl SplicerConfig {
    pub fn tool_timeout(&self) -> Duration {
        Duration::from_secs(self.tool_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Apply `SPLICER_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<usize, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut applied = 0;

        if let Some(value) = lookup("SPLICER_WORK_DIR") {
            self.work_dir = PathBuf::from(value);
            applied += 1;
        }
        if let Some(value) = lookup("SPLICER_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(value);
            applied += 1;
        }
        if let Some(value) = lookup("SPLICER_FFMPEG") {
            self.ffmpeg_path = value;
            applied += 1;
        }
        if let Some(value) = lookup("SPLICER_FFPROBE") {
            self.ffprobe_path = value;
            applied += 1;
        }
        if let Some(value) = lookup("SPLICER_TOOL_TIMEOUT_SECS") {
            self.tool_timeout_secs = parse_secs("SPLICER_TOOL_TIMEOUT_SECS", &value)?;
            applied += 1;
        }
        if let Some(value) = lookup("SPLICER_FETCH_TIMEOUT_SECS") {
            self.fetch_timeout_secs = parse_secs("SPLICER_FETCH_TIMEOUT_SECS", &value)?;
            applied += 1;
        }
        if let Some(value) = lookup("SPLICER_LOG_LEVEL") {
            self.log_level = value;
            applied += 1;
        }

        Ok(applied)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tool_timeout_secs == 0 {
            return Err(DomainError::Config("tool_timeout_secs must be positive".to_string()));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(DomainError::Config("fetch_timeout_secs must be positive".to_string()));
        }
        if self.ffmpeg_path.trim().is_empty() || self.ffprobe_path.trim().is_empty() {
            return Err(DomainError::Config("tool paths cannot be empty".to_string()));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(DomainError::Config(format!(
                "unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

fn parse_secs(key: &str, value: &str) -> Result<u64, DomainError> {
    value
        .trim()
        .parse()
        .map_err(|_| DomainError::Config(format!("{} must be a whole number of seconds", key)))
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    splicer: SplicerConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse a `[splicer]` table; missing keys keep their defaults
    pub fn parse(toml_content: &str) -> Result<SplicerConfig, DomainError> {
        let parsed: ConfigFile = toml::from_str(toml_content)
            .map_err(|e| DomainError::Config(format!("Failed to parse TOML config: {}", e)))?;
        Ok(parsed.splicer)
    }

    /// Load configuration from a file
    pub fn load(file_path: &Path) -> Result<SplicerConfig, DomainError> {
        let content = std::fs::read_to_string(file_path).map_err(|e| {
            DomainError::Config(format!(
                "Failed to read config file {}: {}",
                file_path.display(),
                e
            ))
        })?;
        let config = Self::parse(&content)?;
        info!("Loaded configuration from {}", file_path.display());
        Ok(config)
    }

    /// Load the first default config file that exists, or defaults
    pub fn load_default() -> Result<SplicerConfig, DomainError> {
        for path in DEFAULT_CONFIG_PATHS {
            let path = Path::new(path);
            if path.is_file() {
                return Self::load(path);
            }
        }
        Ok(SplicerConfig::default())
    }
}
