//! Shared fakes for pipeline tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use splicer::adapters::HttpFetchAdapter;
use splicer::ports::{ExecutePort, FetchPort, ProbePort};
use splicer::{CutInteractor, DomainError, KeepRange, MediaDuration};

/// Reports the same duration for every file it is asked about
pub struct FakeProbe {
    seconds: f64,
    fail: bool,
    pub calls: AtomicUsize,
}

impl FakeProbe {
    pub fn with_duration(seconds: f64) -> Self {
        Self {
            seconds,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            seconds: 0.0,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ProbePort for FakeProbe {
    async fn probe_duration(&self, _file_path: &Path) -> Result<MediaDuration, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Probe("ffprobe exited with exit status: 1".to_string()));
        }
        MediaDuration::new(self.seconds)
    }
}

/// Writes a text marker per extracted range and joins by reading the manifest
#[derive(Default)]
pub struct FakeExecutor {
    /// 1-based extraction call that fails
    pub fail_on_extract: Option<usize>,
    /// Write a partial output, then fail the join
    pub fail_concat: bool,
    pub extracted: Mutex<Vec<KeepRange>>,
    pub manifests: Mutex<Vec<String>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_extract(call: usize) -> Self {
        Self {
            fail_on_extract: Some(call),
            ..Self::default()
        }
    }

    pub fn failing_concat() -> Self {
        Self {
            fail_concat: true,
            ..Self::default()
        }
    }

    pub fn extracted(&self) -> Vec<KeepRange> {
        self.extracted.lock().unwrap().clone()
    }

    /// What the fake writes for one range
    pub fn marker(range: &KeepRange) -> String {
        format!("[{:.3}-{:.3}]", range.start, range.end)
    }
}

#[async_trait]
impl ExecutePort for FakeExecutor {
    async fn extract_segment(
        &self,
        _source: &Path,
        range: &KeepRange,
        destination: &Path,
    ) -> Result<(), DomainError> {
        let call = {
            let mut extracted = self.extracted.lock().unwrap();
            extracted.push(*range);
            extracted.len()
        };

        if self.fail_on_extract == Some(call) {
            return Err(DomainError::Extraction("ffmpeg exited with exit status: 1".to_string()));
        }

        tokio::fs::write(destination, Self::marker(range)).await?;
        Ok(())
    }

    async fn concat_segments(&self, manifest: &Path, destination: &Path) -> Result<(), DomainError> {
        let listing = tokio::fs::read_to_string(manifest).await?;
        self.manifests.lock().unwrap().push(listing.clone());

        if self.fail_concat {
            tokio::fs::write(destination, b"partial").await?;
            return Err(DomainError::Concatenation(
                "ffmpeg exited with exit status: 1".to_string(),
            ));
        }

        let base = manifest.parent().unwrap_or_else(|| Path::new("."));
        let mut joined = Vec::new();
        for line in listing.lines() {
            let name = line
                .strip_prefix("file '")
                .and_then(|rest| rest.strip_suffix('\''))
                .unwrap_or_else(|| panic!("unexpected manifest line: {}", line));
            joined.extend(tokio::fs::read(base.join(name)).await?);
        }
        tokio::fs::write(destination, joined).await?;
        Ok(())
    }
}

/// Interactor wired with the fakes and the real local-file fetcher
pub struct Harness {
    pub probe: Arc<FakeProbe>,
    pub executor: Arc<FakeExecutor>,
    pub interactor: CutInteractor,
    pub work_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Harness {
    pub fn new(root: &Path, probe: FakeProbe, executor: FakeExecutor) -> Self {
        let probe = Arc::new(probe);
        let executor = Arc::new(executor);
        let fetch: Arc<dyn FetchPort> =
            Arc::new(HttpFetchAdapter::new(Duration::from_secs(5)).unwrap());
        let work_dir = root.join("work");
        let output_dir = root.join("out");

        let interactor = CutInteractor::new(
            fetch,
            Arc::clone(&probe) as Arc<dyn ProbePort>,
            Arc::clone(&executor) as Arc<dyn ExecutePort>,
            work_dir.clone(),
            output_dir.clone(),
        );

        Self {
            probe,
            executor,
            interactor,
            work_dir,
            output_dir,
        }
    }
}

/// A small local "video" the fetcher can copy
pub fn write_source(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, vec![0u8; 4096]).unwrap();
    path
}

/// Entries left in a directory; a missing directory counts as empty
pub fn entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|rd| rd.count()).unwrap_or(0)
}
