//! HTTP route definitions.
//!
//! ```text
//! /api
//!   POST   /api/scrape-playlist - Scrape a playlist, return videos and chart data
//!
//! /livez   - Liveness probe
//! ```

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::http::handlers::{liveness_probe, scrape_playlist};
use crate::service::PlaylistScraper;

/// Create the main router.
pub fn create_router(scraper: Arc<dyn PlaylistScraper>) -> Router {
    let api_routes = Router::new()
        .route("/scrape-playlist", post(scrape_playlist))
        .with_state(scraper);

    // Liveness probe has no state dependency
    let liveness_route = Router::new().route("/livez", get(liveness_probe));

    Router::new()
        .nest("/api", api_routes)
        .merge(liveness_route)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
