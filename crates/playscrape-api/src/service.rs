//! Request-level scrape orchestration.
//!
//! Each request gets its own page from a [`PageSource`], a deadline wired
//! into the loader's cancellation token, and one retry on a fresh page when
//! the browser fails underneath it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use playscrape_browser::{BrowserManager, PageLease};
use playscrape_core::{
    scrape_playlist, CancellationToken, DriverError, PageDriver, ScrapeError, ScrapeOptions,
    ScrapeReport,
};
use tracing::{info, warn};

/// Something that hands out exclusive pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Page: PageDriver;

    /// Open a fresh page, waiting for capacity if needed.
    async fn open(&self) -> Result<Self::Page, DriverError>;

    /// Close a page. Failures are logged, never returned.
    async fn close(&self, page: Self::Page);
}

#[async_trait]
impl PageSource for BrowserManager {
    type Page = PageLease;

    async fn open(&self) -> Result<PageLease, DriverError> {
        Ok(self.acquire().await?)
    }

    async fn close(&self, page: PageLease) {
        let target_id = page.target_id().to_string();
        if let Err(e) = page.release().await {
            warn!("Failed to close page {}: {}", target_id, e);
        }
    }
}

#[async_trait]
impl<T: PageSource> PageSource for Arc<T> {
    type Page = T::Page;

    async fn open(&self) -> Result<Self::Page, DriverError> {
        self.as_ref().open().await
    }

    async fn close(&self, page: Self::Page) {
        self.as_ref().close(page).await
    }
}

/// The operation the HTTP layer needs.
#[async_trait]
pub trait PlaylistScraper: Send + Sync {
    async fn scrape(&self, url: &str) -> Result<ScrapeReport, ScrapeError>;
}

/// Scrapes playlists on pages from `S`.
pub struct PlaylistService<S> {
    source: S,
    options: ScrapeOptions,
    request_timeout: Duration,
    shutdown: CancellationToken,
}

impl<S: PageSource> PlaylistService<S> {
    /// `shutdown` cancels every in-flight scrape; they return what they have.
    pub fn new(
        source: S,
        options: ScrapeOptions,
        request_timeout: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            source,
            options,
            request_timeout,
            shutdown,
        }
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    async fn attempt(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<ScrapeReport, ScrapeError> {
        let mut page = self.source.open().await?;
        let result = scrape_playlist(&mut page, url, &self.options, cancel).await;
        self.source.close(page).await;
        result
    }
}

#[async_trait]
impl<S: PageSource> PlaylistScraper for PlaylistService<S> {
    async fn scrape(&self, url: &str) -> Result<ScrapeReport, ScrapeError> {
        let cancel = self.shutdown.child_token();
        let deadline = {
            let cancel = cancel.clone();
            let timeout = self.request_timeout;
            tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                cancel.cancel();
            })
        };

        let result = match self.attempt(url, &cancel).await {
            Err(e) if e.is_retryable() && !cancel.is_cancelled() => {
                warn!("Scrape attempt failed ({}), retrying on a fresh page", e);
                self.attempt(url, &cancel).await
            }
            other => other,
        };

        deadline.abort();

        if let Ok(report) = &result {
            info!(
                "Playlist scrape finished: {} videos, {:?} after {} scroll(s)",
                report.videos.len(),
                report.load.state,
                report.load.iterations
            );
        }
        result
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
