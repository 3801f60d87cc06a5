//! Exclusive page leases.

use std::sync::Arc;

use tokio::sync::OwnedSemaphorePermit;
use tracing::{debug, warn};

use crate::cdp::{CdpClient, PageSession};
use super::{BrowserError, BrowserManager};

/// A browser tab owned by one caller until released.
///
/// The tab is closed on [`PageLease::release`]; a lease dropped without
/// release closes its tab from a background task.
pub struct PageLease {
    pub(crate) session: PageSession,
    client: Arc<CdpClient>,
    released: bool,
    _permit: OwnedSemaphorePermit,
}

impl PageLease {
    pub fn target_id(&self) -> &str {
        self.session.target_id()
    }

    pub fn session(&self) -> &PageSession {
        &self.session
    }

    /// Close the tab and return its slot to the pool.
    pub async fn release(mut self) -> Result<(), BrowserError> {
        self.released = true;
        self.client.close_page(self.session.target_id()).await?;
        Ok(())
    }
}

impl Drop for PageLease {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let client = self.client.clone();
        let target_id = self.session.target_id().to_string();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = client.close_page(&target_id).await {
                        warn!("Failed to close page {}: {}", target_id, e);
                    }
                });
            }
            Err(_) => warn!("Page {} dropped outside a runtime; left open", target_id),
        }
    }
}

impl BrowserManager {
    /// Open a fresh tab for exclusive use, waiting for a free slot.
    pub async fn acquire(&self) -> Result<PageLease, BrowserError> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| BrowserError::ShuttingDown)?;

        let client = self.client().await?;
        let session = client.new_page().await?;

        let lease = PageLease {
            session,
            client,
            released: false,
            _permit: permit,
        };

        lease
            .session
            .set_viewport(self.config.viewport_width, self.config.viewport_height)
            .await?;

        debug!(
            "Leased page {} ({} of {} in use)",
            lease.target_id(),
            self.active_pages(),
            self.config.max_pages
        );
        Ok(lease)
    }
}
