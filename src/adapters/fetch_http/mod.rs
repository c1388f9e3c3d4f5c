//! Source fetcher
//!
//! `http://` and `https://` sources are downloaded with reqwest; anything
//! else is treated as a local path and copied into the job directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::ports::*;

const DEFAULT_EXTENSION: &str = "mp4";

/// Fetch adapter for remote URLs and local files
pub struct HttpFetchAdapter {
    client: reqwest::Client,
}

impl HttpFetchAdapter {
    /// Create new fetch adapter with a whole-request timeout
    pub fn new(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    async fn download(&self, source: &str, dest_dir: &Path) -> Result<FetchedSource, DomainError> {
        let url = reqwest::Url::parse(source)
            .map_err(|e| DomainError::Fetch(format!("invalid URL '{}': {}", source, e)))?;
        let destination = dest_dir.join(format!("source.{}", source_extension(url.path())));

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::Fetch(describe_request_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Fetch(format!("server responded with {}", status)));
        }

        let mut file = tokio::fs::File::create(&destination).await?;
        let mut bytes = 0u64;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| DomainError::Fetch(describe_request_error(&e)))?
        {
            file.write_all(&chunk).await?;
            bytes += chunk.len() as u64;
        }
        file.flush().await?;

        if bytes == 0 {
            return Err(DomainError::Fetch("server returned an empty body".to_string()));
        }

        info!(bytes, "downloaded source");
        Ok(FetchedSource {
            path: destination,
            bytes,
        })
    }

    async fn copy_local(&self, source: &str, dest_dir: &Path) -> Result<FetchedSource, DomainError> {
        let path = PathBuf::from(source.strip_prefix("file://").unwrap_or(source));
        if !path.is_file() {
            return Err(DomainError::Fetch(format!("source file not found: {}", source)));
        }

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let destination = dest_dir.join(format!("source.{}", sanitize_extension(&extension)));

        let bytes = tokio::fs::copy(&path, &destination)
            .await
            .map_err(|e| DomainError::Fetch(format!("could not read source file: {}", e)))?;

        debug!(bytes, "copied local source");
        Ok(FetchedSource {
            path: destination,
            bytes,
        })
    }
}

#[async_trait]
impl FetchPort for HttpFetchAdapter {
    async fn fetch(&self, source: &str, dest_dir: &Path) -> Result<FetchedSource, DomainError> {
        tokio::fs::create_dir_all(dest_dir).await?;

        if is_remote(source) {
            self.download(source, dest_dir).await
        } else {
            self.copy_local(source, dest_dir).await
        }
    }
}

/// Whether `source` names an HTTP(S) resource
pub fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Container extension taken from the last path segment of a URL
pub fn source_extension(url_path: &str) -> String {
    url_path
        .rsplit('/')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| sanitize_extension(ext))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

fn sanitize_extension(ext: &str) -> String {
    let ext = ext.to_ascii_lowercase();
    if !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        ext
    } else {
        DEFAULT_EXTENSION.to_string()
    }
}

fn describe_request_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("could not connect: {}", err)
    } else {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://cdn.example.com/v.mp4"));
        assert!(is_remote("HTTP://example.com/v"));
        assert!(!is_remote("/tmp/v.mp4"));
        assert!(!is_remote("file:///tmp/v.mp4"));
    }

    #[test]
    fn test_source_extension() {
        assert_eq!(source_extension("/media/clip.MKV"), "mkv");
        assert_eq!(source_extension("/media/clip"), "mp4");
        assert_eq!(source_extension("/"), "mp4");
        assert_eq!(source_extension("/a.b/clip.weird-ext"), "mp4");
    }

    #[tokio::test]
    async fn test_copy_local_source() {
        let src_dir = tempfile::tempdir().unwrap();
        let src = src_dir.path().join("input.mov");
        std::fs::write(&src, b"not really a movie").unwrap();
        let job_dir = tempfile::tempdir().unwrap();

        let adapter = HttpFetchAdapter::new(Duration::from_secs(5)).unwrap();
        let fetched = adapter
            .fetch(src.to_str().unwrap(), job_dir.path())
            .await
            .unwrap();

        assert_eq!(fetched.path, job_dir.path().join("source.mov"));
        assert_eq!(fetched.bytes, 18);
        assert_eq!(std::fs::read(&fetched.path).unwrap(), b"not really a movie");
    }

    #[tokio::test]
    async fn test_missing_local_source_is_fetch_error() {
        let job_dir = tempfile::tempdir().unwrap();
        let adapter = HttpFetchAdapter::new(Duration::from_secs(5)).unwrap();
        let err = adapter
            .fetch("/no/such/video.mp4", job_dir.path())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FetchError);
    }
}
