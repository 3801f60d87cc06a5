use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use playscrape_core::{DriverError, LoadOutcome, LoadState, ScrapeError};

use super::*;

/// Returns a fixed list, or fails with a driver error when `videos` is `None`.
struct StubScraper {
    videos: Option<Vec<VideoRecord>>,
    calls: AtomicUsize,
    last_url: std::sync::Mutex<Option<String>>,
}

impl StubScraper {
    fn returning(videos: Vec<VideoRecord>) -> Arc<Self> {
        Arc::new(Self {
            videos: Some(videos),
            calls: AtomicUsize::new(0),
            last_url: std::sync::Mutex::new(None),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            videos: None,
            calls: AtomicUsize::new(0),
            last_url: std::sync::Mutex::new(None),
        })
    }
}

#[async_trait]
impl PlaylistScraper for StubScraper {
    async fn scrape(&self, url: &str) -> Result<ScrapeReport, ScrapeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        match &self.videos {
            Some(videos) => Ok(ScrapeReport {
                videos: videos.clone(),
                load: LoadOutcome {
                    state: LoadState::Settled,
                    iterations: 1,
                    final_height: 700,
                    elapsed: Duration::from_secs(2),
                },
            }),
            None => Err(ScrapeError::Driver(DriverError::SessionClosed)),
        }
    }
}

fn video(title: &str, views: u64) -> VideoRecord {
    VideoRecord {
        title: title.to_string(),
        view_count: views,
        thumbnail_url: format!("https://i.ytimg.com/vi/{}/hq.jpg", views),
    }
}

fn body(url: Option<&str>) -> Result<Json<ScrapePlaylistRequest>, JsonRejection> {
    Ok(Json(ScrapePlaylistRequest {
        playlist_url: url.map(str::to_string),
    }))
}

#[test]
fn test_request_url_trimmed() {
    let request: ScrapePlaylistRequest =
        serde_json::from_str(r#"{"playlistUrl": "  https://example.com/p  "}"#).unwrap();
    assert_eq!(request.url(), Some("https://example.com/p"));
}

#[test]
fn test_request_url_missing_or_blank() {
    let missing: ScrapePlaylistRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(missing.url(), None);

    let blank: ScrapePlaylistRequest = serde_json::from_str(r#"{"playlistUrl": "   "}"#).unwrap();
    assert_eq!(blank.url(), None);

    let null: ScrapePlaylistRequest = serde_json::from_str(r#"{"playlistUrl": null}"#).unwrap();
    assert_eq!(null.url(), None);
}

#[test]
fn test_response_graph_data_numbering() {
    let response = ScrapePlaylistResponse::from(vec![video("a", 10), video("b", 0)]);
    assert_eq!(
        response.graph_data,
        vec![
            GraphPoint { name: "Video 1".to_string(), views: 10 },
            GraphPoint { name: "Video 2".to_string(), views: 0 },
        ]
    );
    assert_eq!(response.video_list.len(), 2);
}

#[test]
fn test_response_field_names() {
    let response = ScrapePlaylistResponse::from(vec![video("Intro video", 10_000)]);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["videoList"][0]["title"], "Intro video");
    assert_eq!(json["videoList"][0]["views"], 10_000);
    assert_eq!(json["videoList"][0]["thumbnail"], "https://i.ytimg.com/vi/10000/hq.jpg");
    assert_eq!(json["graphData"][0]["name"], "Video 1");
    assert_eq!(json["graphData"][0]["views"], 10_000);
}

#[test]
fn test_empty_playlist_response() {
    let response = ScrapePlaylistResponse::from(Vec::new());
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, serde_json::json!({"videoList": [], "graphData": []}));
}

#[tokio::test]
async fn test_scrape_playlist_success() {
    let scraper = StubScraper::returning(vec![video("a", 1), video("b", 2)]);
    let state: Arc<dyn PlaylistScraper> = scraper.clone();

    let Json(response) = scrape_playlist(State(state), body(Some(" https://example.com/p ")))
        .await
        .unwrap();

    assert_eq!(response.video_list.len(), 2);
    assert_eq!(response.graph_data[1].name, "Video 2");
    assert_eq!(
        scraper.last_url.lock().unwrap().as_deref(),
        Some("https://example.com/p")
    );
}

#[tokio::test]
async fn test_scrape_playlist_missing_url_does_no_work() {
    let scraper = StubScraper::returning(vec![]);
    let state: Arc<dyn PlaylistScraper> = scraper.clone();

    let result = scrape_playlist(State(state), body(None)).await;

    assert!(matches!(result, Err(ApiError::MissingUrl)));
    assert_eq!(scraper.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_scrape_playlist_failure_is_500() {
    let state: Arc<dyn PlaylistScraper> = StubScraper::failing();

    let result = scrape_playlist(State(state), body(Some("https://example.com/p"))).await;

    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_liveness_probe() {
    let response = liveness_probe().await;
    assert_eq!(response.0["status"], "ok");
}
