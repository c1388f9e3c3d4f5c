//! Configuration initialization and hierarchy management

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::adapters::{SplicerConfig, TomlConfigAdapter};
use crate::cli::{Cli, Commands};

/// Build the effective configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration(cli: &Cli) -> Result<SplicerConfig> {
    let mut config = load_config_file(cli)?;

    let env_overrides = load_environment_variables(&mut config, |key| std::env::var(key).ok())?;
    if env_overrides > 0 {
        info!("Applied {} environment variable overrides", env_overrides);
    }

    let cli_overrides = apply_cli_configuration_overrides(&mut config, cli);
    if cli_overrides > 0 {
        info!("Applied {} CLI configuration overrides", cli_overrides);
    }

    config.validate().context("Invalid configuration")?;
    debug!(?config, "Configuration initialized");
    Ok(config)
}

/// Load configuration from `--config`, else the first default path that exists
fn load_config_file(cli: &Cli) -> Result<SplicerConfig> {
    let config = match &cli.config {
        Some(path) => TomlConfigAdapter::load(path)?,
        None => TomlConfigAdapter::load_default()?,
    };
    Ok(config)
}

/// Apply `SPLICER_*` environment variables
fn load_environment_variables<F>(config: &mut SplicerConfig, lookup: F) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let applied = config
        .apply_env(lookup)
        .context("Invalid environment override")?;
    Ok(applied)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_configuration_overrides(config: &mut SplicerConfig, cli: &Cli) -> usize {
    let mut cli_overrides = 0;

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
        cli_overrides += 1;
    }
    if let Some(work_dir) = &cli.work_dir {
        config.work_dir = work_dir.clone();
        cli_overrides += 1;
    }

    if let Commands::Cut(args) = &cli.command {
        if let Some(timeout) = args.tool_timeout {
            config.tool_timeout_secs = timeout;
            cli_overrides += 1;
        }
    }

    cli_overrides
}
