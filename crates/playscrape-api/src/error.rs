//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use playscrape_core::ScrapeError;
use thiserror::Error;
use tracing::error;

use crate::http::handlers::ErrorResponse;

pub const MISSING_URL_MESSAGE: &str = "Playlist URL is required";
pub const SCRAPE_FAILED_MESSAGE: &str = "An error occurred while scraping the playlist";

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request carried no usable playlist URL.
    #[error("Playlist URL is required")]
    MissingUrl,

    /// The scrape itself failed.
    #[error("Scrape failed: {0}")]
    Scrape(#[from] ScrapeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::Scrape(ScrapeError::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Scrape(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Scrape failures are reported generically.
    pub fn public_message(&self) -> &'static str {
        if self.status() == StatusCode::BAD_REQUEST {
            MISSING_URL_MESSAGE
        } else {
            SCRAPE_FAILED_MESSAGE
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Scraping failed: {}", self);
        }
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
