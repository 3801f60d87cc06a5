//! Scrape error taxonomy.

use thiserror::Error;

use crate::dom::SelectorError;
use crate::driver::DriverError;

/// Request-level scrape failures.
///
/// Loader ceilings and per-item anomalies are not errors: the first yields a
/// partial report, the second zero/empty field defaults.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request was rejected before any browser work.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The list container never appeared.
    #[error("Playlist did not load: {0}")]
    InitialLoad(String),

    /// A configured selector is not valid CSS.
    #[error("Invalid selector {0}")]
    Selector(#[from] SelectorError),

    /// The browser failed underneath the scrape.
    #[error("Browser failure: {0}")]
    Driver(#[from] DriverError),
}

impl ScrapeError {
    /// Whether one retry on a fresh page is worthwhile.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ScrapeError::Driver(_))
    }
}
