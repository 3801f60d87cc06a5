//! Browser capability trait the engine depends on.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`PageDriver`] implementation.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Navigation to the target URL failed.
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// A bounded wait elapsed.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Script evaluation failed inside the page.
    #[error("Script error: {0}")]
    Script(String),

    /// The browser session or connection is gone.
    #[error("Session closed")]
    SessionClosed,

    /// The page returned data the driver could not interpret.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Any other transport-level failure.
    #[error("Driver error: {0}")]
    Other(String),
}

/// The set of page operations the loader and extractor need.
///
/// Methods take `&mut self`: a page handle has exactly one writer for the
/// duration of a scrape.
#[async_trait]
pub trait PageDriver: Send {
    /// Navigate to `url` and wait for the document to load.
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError>;

    /// Wait until `selector` matches at least one element.
    async fn wait_for_selector(&mut self, selector: &str, timeout_ms: u64)
        -> Result<(), DriverError>;

    /// Current scrollable content height in CSS pixels.
    async fn scroll_height(&mut self) -> Result<u64, DriverError>;

    /// Scroll the viewport to vertical offset `height`.
    async fn scroll_to(&mut self, height: u64) -> Result<(), DriverError>;

    /// `outerHTML` of every element matching `selector`, in document order.
    ///
    /// Image `src` attributes carry the URL the page resolved, not the raw
    /// markup value.
    async fn query_all(&mut self, selector: &str) -> Result<Vec<String>, DriverError>;
}

