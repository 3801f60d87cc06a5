//! # playscrape-core
//!
//! Engine for turning a rendered, lazily-loaded playlist page into an ordered
//! list of [`VideoRecord`]s.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐  navigate / wait   ┌──────────┐  query_all   ┌───────────┐
//! │  caller  │ ─────────────────► │  Loader  │ ───────────► │ Extractor │ ──► Vec<VideoRecord>
//! └──────────┘                    └──────────┘              └───────────┘
//!                                  scroll, settle,           CSS selection,
//!                                  re-measure                view-count parse
//! ```
//!
//! The engine talks to the browser only through the [`PageDriver`] trait; the
//! CDP implementation lives in `playscrape-browser`. List items come back as
//! `outerHTML` and are read locally with `scraper` selectors.
//!
//! The `test-util` feature exposes `snapshot::SnapshotDriver`, an in-memory
//! page for exercising the loader and the services built on it.

pub mod count;
pub mod dom;
mod driver;
mod error;
pub mod extractor;
pub mod loader;
mod record;
mod scrape;
#[cfg(any(test, feature = "test-util"))]
pub mod snapshot;

pub use count::parse_view_count;
pub use dom::{parse_selector, select_outer_html, SelectorError};
pub use driver::{DriverError, PageDriver};
pub use error::ScrapeError;
pub use extractor::{extract_records, ItemSelectors};
pub use loader::{LoadLimits, LoadOutcome, LoadState, Loader};
pub use record::{RawItemText, VideoRecord};
pub use scrape::{scrape_playlist, ScrapeOptions, ScrapeReport};
#[cfg(any(test, feature = "test-util"))]
pub use snapshot::SnapshotDriver;

/// Re-exported so callers can build tokens without a direct tokio-util dependency.
pub use tokio_util::sync::CancellationToken;
