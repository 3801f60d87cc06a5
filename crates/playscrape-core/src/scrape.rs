//! One-page scrape: navigate, wait, load, extract.

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::dom::parse_selector;
use crate::driver::{DriverError, PageDriver};
use crate::error::ScrapeError;
use crate::extractor::{extract_records, ItemSelectors};
use crate::loader::{LoadLimits, LoadOutcome, Loader};
use crate::record::VideoRecord;

pub const DEFAULT_LIST_ITEM_SELECTOR: &str = "#contents ytd-playlist-video-renderer";
pub const DEFAULT_INITIAL_SELECTOR_TIMEOUT_MS: u64 = 30_000;

/// Everything a scrape needs besides the page and the URL.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Selects every list item, evaluated against the whole document.
    /// Parsed before navigation so a bad value fails without touching the page.
    pub list_item_selector: String,
    pub item_selectors: ItemSelectors,
    /// How long to wait for the first list item after navigation.
    pub initial_selector_timeout_ms: u64,
    pub limits: LoadLimits,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            list_item_selector: DEFAULT_LIST_ITEM_SELECTOR.to_string(),
            item_selectors: ItemSelectors::default(),
            initial_selector_timeout_ms: DEFAULT_INITIAL_SELECTOR_TIMEOUT_MS,
            limits: LoadLimits::default(),
        }
    }
}

/// Records plus how loading ended.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport {
    pub videos: Vec<VideoRecord>,
    pub load: LoadOutcome,
}

impl ScrapeReport {
    /// True when the list may be incomplete.
    pub fn is_partial(&self) -> bool {
        self.load.is_partial()
    }
}

/// Scrape the playlist at `url` using `driver`.
///
/// The caller owns the page; it is left open on return, success or not.
pub async fn scrape_playlist<D: PageDriver + ?Sized>(
    driver: &mut D,
    url: &str,
    options: &ScrapeOptions,
    cancel: &CancellationToken,
) -> Result<ScrapeReport, ScrapeError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ScrapeError::InvalidInput("playlist URL is empty".to_string()));
    }
    parse_selector(&options.list_item_selector)?;

    info!("Scraping playlist {}", url);
    driver.navigate(url).await?;

    match driver
        .wait_for_selector(&options.list_item_selector, options.initial_selector_timeout_ms)
        .await
    {
        Ok(()) => {}
        Err(DriverError::Timeout(msg)) => return Err(ScrapeError::InitialLoad(msg)),
        Err(e) => return Err(e.into()),
    }

    let load = Loader::new(driver, options.limits).run(cancel).await?;

    let items = driver.query_all(&options.list_item_selector).await?;
    let videos = extract_records(&items, &options.item_selectors);

    if load.is_partial() {
        warn!(
            "Returning {} videos from a partially loaded playlist ({:?})",
            videos.len(),
            load.state
        );
    } else {
        info!("Scraped {} videos from {}", videos.len(), url);
    }

    Ok(ScrapeReport { videos, load })
}

#[cfg(test)]
#[path = "scrape_tests.rs"]
mod tests;
