//! Splicer CLI
//!
//! Removes time ranges from a video and stitches the remaining pieces back
//! together with ffmpeg stream copy, so no re-encoding takes place.
//!
//! # Usage
//!
//! ```bash
//! splicer cut --input https://example.com/talk.mp4 --cut 00:00-00:12 --cut 41:10-42:00
//! splicer cut --input lecture.mkv --cuts-file cuts.yaml --output trimmed.mkv
//! splicer plan --duration 01:00:00 --cut 10:00-12:30
//! splicer probe --input lecture.mkv
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use splicer::adapters::{LogFormat, TracingLogAdapter};
use splicer::cli::{commands, Cli, Commands};
use splicer::config_initialization::initialize_configuration;
use splicer::domain::errors::DomainError;

/// Main entry point for the Splicer CLI application
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let log_format: LogFormat = cli.log_format.parse()?;
    let config = initialize_configuration(&cli)?;
    TracingLogAdapter::init(&config.log_level, log_format);

    info!("Starting Splicer");
    debug!(work_dir = %config.work_dir.display(), "Working directory");

    match cli.command {
        Commands::Cut(args) => {
            info!("Executing cut command");
            commands::cut(args, &config).await?;
        }
        Commands::Plan(args) => {
            info!("Executing plan command");
            commands::plan(args)?;
        }
        Commands::Probe(args) => {
            info!("Executing probe command");
            commands::probe(args, &config).await?;
        }
    }

    Ok(())
}

/// Print the failure with its error kind when one is known
fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<DomainError>() {
        Some(domain) => eprintln!("error[{}]: {:#}", domain.kind(), err),
        None => eprintln!("error: {:#}", err),
    }
}
