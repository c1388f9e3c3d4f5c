// Cut interactor - Orchestrates the cut-and-rejoin use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, info_span, warn, Instrument};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::engine::splicer::{scratch_root, SegmentSplicer, SpliceSummary};
use crate::ports::*;
use crate::utils::path::PathUtils;

/// Interactor for the cut use case
pub struct CutInteractor {
    fetch_port: Arc<dyn FetchPort>,
    probe_port: Arc<dyn ProbePort>,
    splicer: SegmentSplicer,
    work_dir: PathBuf,
    output_dir: PathBuf,
}

/// Everything a finished job produced before the report is assembled
struct JobOutcome {
    duration: MediaDuration,
    keep_ranges: Vec<KeepRange>,
    output_path: PathBuf,
    summary: SpliceSummary,
}

impl CutInteractor {
    /// Create new cut interactor with injected ports
    pub fn new(
        fetch_port: Arc<dyn FetchPort>,
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        work_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetch_port,
            probe_port,
            splicer: SegmentSplicer::new(execute_port),
            work_dir: work_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Run one job: fetch, probe, plan, extract, join
    pub async fn execute(&self, request: CutRequest) -> Result<CutReport, DomainError> {
        let job_id = JobId::new();
        self.run_job(job_id, request)
            .instrument(info_span!("job", %job_id))
            .await
    }

    async fn run_job(&self, job_id: JobId, request: CutRequest) -> Result<CutReport, DomainError> {
        let started_at = Utc::now();
        info!(source = %request.source, cuts = request.cuts.len(), "starting cut job");

        // Reject bad instructions before touching the network or disk.
        let cuts = SegmentCalculator::parse_cuts(&request.cuts)?;

        let job_dir = self.work_dir.join(job_id.to_string());
        tokio::fs::create_dir_all(&job_dir).await?;

        let result = self.process(job_id, &request, &cuts, &job_dir).await;

        if let Err(e) = tokio::fs::remove_dir_all(&job_dir).await {
            warn!(error = %e, "failed to remove job directory");
        }

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(kind = %err.kind(), error = %err, "cut job failed");
                return Err(err);
            }
        };

        let output_duration = match self.probe_port.probe_duration(&outcome.output_path).await {
            Ok(duration) => Some(duration.as_seconds()),
            Err(e) => {
                warn!(error = %e, "could not probe output duration");
                None
            }
        };

        let report = CutReport {
            job_id,
            source: request.source,
            original_duration: outcome.duration.as_seconds(),
            cuts_applied: cuts.len(),
            segments_kept: outcome.summary.segments,
            kept_duration: SegmentCalculator::kept_duration(&outcome.keep_ranges),
            keep_ranges: outcome.keep_ranges,
            output_path: outcome.output_path,
            output_size: outcome.summary.output_size,
            output_duration,
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            output = %report.output_path.display(),
            bytes = report.output_size,
            segments = report.segments_kept,
            "cut job completed"
        );
        Ok(report)
    }

    async fn process(
        &self,
        job_id: JobId,
        request: &CutRequest,
        cuts: &[CutRange],
        job_dir: &Path,
    ) -> Result<JobOutcome, DomainError> {
        let fetched = self.fetch_port.fetch(&request.source, job_dir).await?;
        info!(bytes = fetched.bytes, "source fetched");

        let duration = self.probe_port.probe_duration(&fetched.path).await?;
        if duration.as_seconds() <= 0.0 {
            return Err(DomainError::Probe("source reports a zero duration".to_string()));
        }
        info!(duration = %duration, "source probed");

        let keep_ranges = SegmentCalculator::compute_keep_ranges(cuts, duration);
        if keep_ranges.is_empty() {
            return Err(DomainError::EmptyResult(format!(
                "the {} cut(s) remove the whole {} of video",
                cuts.len(),
                duration
            )));
        }
        info!(segments = keep_ranges.len(), "keep ranges computed");

        let output_path = match &request.output {
            Some(path) => path.clone(),
            None => self
                .output_dir
                .join(PathUtils::default_output_name(&request.source, &fetched.path, job_id)),
        };

        let summary = self
            .splicer
            .splice(&fetched.path, &keep_ranges, &scratch_root(job_dir), &output_path)
            .await?;

        Ok(JobOutcome {
            duration,
            keep_ranges,
            output_path,
            summary,
        })
    }
}
