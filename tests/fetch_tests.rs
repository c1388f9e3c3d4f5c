//! HTTP fetcher against a mock server

use std::time::Duration;

use splicer::adapters::HttpFetchAdapter;
use splicer::ports::FetchPort;
use splicer::ErrorKind;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter() -> HttpFetchAdapter {
    HttpFetchAdapter::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_download_writes_body_with_url_extension() {
    let server = MockServer::start().await;
    let body = vec![7u8; 64 * 1024];
    Mock::given(method("GET"))
        .and(path("/media/lecture.webm"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let job_dir = tempfile::tempdir().unwrap();
    let url = format!("{}/media/lecture.webm?token=abc", server.uri());

    let fetched = adapter().fetch(&url, job_dir.path()).await.unwrap();

    assert_eq!(fetched.path, job_dir.path().join("source.webm"));
    assert_eq!(fetched.bytes, body.len() as u64);
    assert_eq!(std::fs::read(&fetched.path).unwrap(), body);
}

#[tokio::test]
async fn test_not_found_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let job_dir = tempfile::tempdir().unwrap();
    let err = adapter()
        .fetch(&format!("{}/missing.mp4", server.uri()), job_dir.path())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FetchError);
    assert!(err.to_string().contains("404"), "{}", err);
}

#[tokio::test]
async fn test_empty_body_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let job_dir = tempfile::tempdir().unwrap();
    let err = adapter()
        .fetch(&format!("{}/empty.mp4", server.uri()), job_dir.path())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FetchError);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![1u8; 16])
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let job_dir = tempfile::tempdir().unwrap();
    let fetcher = HttpFetchAdapter::new(Duration::from_millis(200)).unwrap();
    let err = fetcher
        .fetch(&format!("{}/slow.mp4", server.uri()), job_dir.path())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FetchError);
}

#[tokio::test]
async fn test_unreachable_host_is_a_fetch_error() {
    let job_dir = tempfile::tempdir().unwrap();
    let err = adapter()
        .fetch("http://127.0.0.1:9/video.mp4", job_dir.path())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FetchError);
}
