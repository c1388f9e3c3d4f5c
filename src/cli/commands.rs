//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::adapters::SplicerConfig;
use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::args::{CutArgs, PlanArgs, ProbeArgs};
use crate::domain::errors::DomainError;
use crate::domain::model::{
    CutInstruction, CutInstructions, CutReport, CutRequest, KeepRange, MediaDuration, TimeSpec,
};
use crate::domain::rules::SegmentCalculator;
use crate::utils::Utils;

/// Execute the cut command
pub async fn cut(args: CutArgs, config: &SplicerConfig) -> Result<()> {
    info!("Starting cut operation");
    info!("Input: {}", args.input);

    let cuts = load_cut_instructions(args.cuts_file.as_deref(), &args.cut)?;

    let container = DefaultAppContainer::new(config)?;
    let mut request = CutRequest::new(args.input, cuts);
    if let Some(output) = args.output {
        request = request.with_output(output);
    }

    let report = container.cut_interactor().execute(request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }
    Ok(())
}

/// Execute the plan command
pub fn plan(args: PlanArgs) -> Result<()> {
    let total = TimeSpec::parse(&args.duration)
        .with_context(|| format!("Invalid duration '{}'", args.duration))?;
    if total.as_seconds() <= 0.0 {
        return Err(DomainError::parse(&args.duration, "duration must be positive").into());
    }
    let duration = MediaDuration::new(total.as_seconds())?;

    let instructions = load_cut_instructions(args.cuts_file.as_deref(), &args.cut)?;
    let cuts = SegmentCalculator::parse_cuts(&instructions)?;
    let keep_ranges = SegmentCalculator::compute_keep_ranges(&cuts, duration);

    if keep_ranges.is_empty() {
        return Err(DomainError::EmptyResult(
            "the cuts remove the entire timeline".to_string(),
        )
        .into());
    }

    let plan = PlanOutput {
        duration: duration.as_seconds(),
        cuts: cuts.len(),
        kept_duration: SegmentCalculator::kept_duration(&keep_ranges),
        keep_ranges,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }
    Ok(())
}

/// Execute the probe command
pub async fn probe(args: ProbeArgs, config: &SplicerConfig) -> Result<()> {
    info!("Probing {}", args.input.display());

    let container = DefaultAppContainer::new(config)?;
    let duration = container.probe_port().probe_duration(&args.input).await?;

    if args.json {
        let output = serde_json::json!({
            "path": args.input,
            "duration": duration.as_seconds(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}: {}", args.input.display(), duration);
    }
    Ok(())
}

/// Collect cuts from an optional JSON/YAML document followed by `--cut` shorthands
pub fn load_cut_instructions(
    cuts_file: Option<&Path>,
    inline: &[String],
) -> Result<Vec<CutInstruction>> {
    let mut cuts = match cuts_file {
        Some(path) => read_cuts_file(path)?.cuts,
        None => Vec::new(),
    };

    for spec in inline {
        cuts.push(CutInstruction::parse_shorthand(spec)?);
    }
    Ok(cuts)
}

fn read_cuts_file(path: &Path) -> Result<CutInstructions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cuts file {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    let document: CutInstructions = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?
    };
    Ok(document)
}

#[derive(Debug, Serialize)]
struct PlanOutput {
    duration: f64,
    cuts: usize,
    keep_ranges: Vec<KeepRange>,
    kept_duration: f64,
}

fn display_plan(plan: &PlanOutput) {
    println!("Duration: {}", TimeSpec::from_seconds(plan.duration));
    println!("Cuts: {}", plan.cuts);
    println!("Keep ranges:");
    for (index, range) in plan.keep_ranges.iter().enumerate() {
        println!(
            "  #{:<3} {} - {}  ({:.3}s)",
            index + 1,
            TimeSpec::from_seconds(range.start),
            TimeSpec::from_seconds(range.end),
            range.duration()
        );
    }
    println!("Kept: {}", TimeSpec::from_seconds(plan.kept_duration));
}

fn display_report(report: &CutReport) {
    println!("Job: {}", report.job_id);
    println!("Source: {}", report.source);
    println!(
        "Original duration: {}",
        TimeSpec::from_seconds(report.original_duration)
    );
    println!("Cuts applied: {}", report.cuts_applied);
    println!("Segments kept: {}", report.segments_kept);
    println!("Kept duration: {}", TimeSpec::from_seconds(report.kept_duration));
    if let Some(actual) = report.output_duration {
        println!("Output duration: {}", TimeSpec::from_seconds(actual));
    }
    println!(
        "Output: {} ({})",
        report.output_path.display(),
        Utils::format_file_size(report.output_size)
    );
}
