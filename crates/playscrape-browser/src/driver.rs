//! [`PageDriver`] over a leased CDP page.

use async_trait::async_trait;
use playscrape_core::{DriverError, PageDriver};
use tracing::debug;

use crate::cdp::{js_string, CdpError};
use crate::manager::{BrowserError, PageLease};

const SCROLL_HEIGHT_SCRIPT: &str =
    "Math.max(document.body ? document.body.scrollHeight : 0, document.documentElement.scrollHeight)";

/// `outerHTML` of every element matching the selector. Each copy's `img`
/// elements get their `src` attribute replaced by the URL the page resolved.
const SNAPSHOT_SCRIPT: &str = r#"(() => {
  return Array.from(document.querySelectorAll(__SELECTOR__)).map((node) => {
    const copy = node.cloneNode(true);
    const live = node.querySelectorAll('img');
    copy.querySelectorAll('img').forEach((img, i) => {
      if (live[i] && live[i].src) img.setAttribute('src', live[i].src);
    });
    return copy.outerHTML;
  });
})()"#;

fn snapshot_script(selector: &str) -> String {
    SNAPSHOT_SCRIPT.replace("__SELECTOR__", &js_string(selector))
}

fn scroll_script(height: u64) -> String {
    format!("window.scrollTo(0, {})", height)
}

impl From<CdpError> for DriverError {
    fn from(e: CdpError) -> Self {
        match e {
            CdpError::Navigation(msg) => DriverError::Navigation(msg),
            CdpError::Timeout(msg) => DriverError::Timeout(msg),
            CdpError::Script(msg) => DriverError::Script(msg),
            CdpError::SessionClosed => DriverError::SessionClosed,
            CdpError::InvalidResponse(msg) => DriverError::InvalidResponse(msg),
            other @ (CdpError::Unreachable(_) | CdpError::Command { .. }) => {
                DriverError::Other(other.to_string())
            }
        }
    }
}

impl From<BrowserError> for DriverError {
    fn from(e: BrowserError) -> Self {
        match e {
            BrowserError::NavigationFailed(msg) => DriverError::Navigation(msg),
            BrowserError::NotConnected | BrowserError::ShuttingDown => DriverError::SessionClosed,
            other => DriverError::Other(other.to_string()),
        }
    }
}

#[async_trait]
impl PageDriver for PageLease {
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        self.session.navigate(url).await?;
        Ok(())
    }

    async fn wait_for_selector(
        &mut self,
        selector: &str,
        timeout_ms: u64,
    ) -> Result<(), DriverError> {
        self.session.wait_for_selector(selector, timeout_ms).await?;
        Ok(())
    }

    async fn scroll_height(&mut self) -> Result<u64, DriverError> {
        let value = self.session.evaluate(SCROLL_HEIGHT_SCRIPT).await?;
        value
            .as_f64()
            .filter(|h| *h >= 0.0)
            .map(|h| h as u64)
            .ok_or_else(|| DriverError::InvalidResponse(format!("scroll height: {}", value)))
    }

    async fn scroll_to(&mut self, height: u64) -> Result<(), DriverError> {
        self.session.evaluate(&scroll_script(height)).await?;
        Ok(())
    }

    async fn query_all(&mut self, selector: &str) -> Result<Vec<String>, DriverError> {
        let items: Vec<String> = self.session.evaluate_as(&snapshot_script(selector)).await?;
        debug!("Captured outerHTML of {} elements for '{}'", items.len(), selector);
        Ok(items)
    }
}
