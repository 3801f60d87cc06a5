//! Playlist scrape handlers.
//!
//! Request and response bodies keep the field names existing web clients
//! already send and read.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use playscrape_core::{ScrapeReport, VideoRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::service::PlaylistScraper;

/// Body of `POST /api/scrape-playlist`.
#[derive(Debug, Default, Deserialize)]
pub struct ScrapePlaylistRequest {
    #[serde(rename = "playlistUrl", default)]
    pub playlist_url: Option<String>,
}

impl ScrapePlaylistRequest {
    /// The URL with surrounding whitespace removed, if any remains.
    pub fn url(&self) -> Option<&str> {
        self.playlist_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// One point of the per-video views chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub name: String,
    pub views: u64,
}

/// Successful scrape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapePlaylistResponse {
    pub video_list: Vec<VideoRecord>,
    pub graph_data: Vec<GraphPoint>,
}

impl From<Vec<VideoRecord>> for ScrapePlaylistResponse {
    fn from(videos: Vec<VideoRecord>) -> Self {
        let graph_data = videos
            .iter()
            .enumerate()
            .map(|(i, video)| GraphPoint {
                name: format!("Video {}", i + 1),
                views: video.view_count,
            })
            .collect();
        Self {
            video_list: videos,
            graph_data,
        }
    }
}

impl From<ScrapeReport> for ScrapePlaylistResponse {
    fn from(report: ScrapeReport) -> Self {
        report.videos.into()
    }
}

/// Error body for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Scrape a playlist and return its videos with chart data.
///
/// A body that is not JSON, or carries no usable `playlistUrl`, is a 400.
pub async fn scrape_playlist(
    State(scraper): State<Arc<dyn PlaylistScraper>>,
    body: Result<Json<ScrapePlaylistRequest>, JsonRejection>,
) -> Result<Json<ScrapePlaylistResponse>, ApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Rejected scrape request body: {}", rejection);
            return Err(ApiError::MissingUrl);
        }
    };
    let url = request.url().ok_or(ApiError::MissingUrl)?;

    info!("Scraping playlist {}", url);
    let report = scraper.scrape(url).await?;
    Ok(Json(report.into()))
}

/// Liveness probe.
pub async fn liveness_probe() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
