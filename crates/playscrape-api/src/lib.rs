//! # playscrape-api
//!
//! HTTP surface for playlist scraping.
//!
//! ```text
//! POST /api/scrape-playlist ──► PlaylistScraper ──► PageSource (browser pool)
//! GET  /livez
//! ```
//!
//! Handlers depend on the [`PlaylistScraper`] trait only; the production
//! implementation is [`PlaylistService`] over a [`PageSource`].

pub mod error;
pub mod http;
pub mod server;
pub mod service;

pub use error::ApiError;
pub use http::handlers::{ErrorResponse, GraphPoint, ScrapePlaylistRequest, ScrapePlaylistResponse};
pub use http::routes::create_router;
pub use server::{InterfaceConfig, InterfaceServer};
pub use service::{PageSource, PlaylistScraper, PlaylistService};
