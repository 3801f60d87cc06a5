//! In-memory [`PageDriver`] over rendered HTML.
//!
//! Items are revealed in batches, one batch per scroll that reaches the
//! bottom of the page, which is how a virtualized playlist behaves. Lets the
//! loader and the services above it run deterministically without a browser.

use std::time::Duration;

use async_trait::async_trait;

use crate::dom::{parse_selector, select_outer_html};
use crate::driver::{DriverError, PageDriver};

const HEADER_HEIGHT: u64 = 400;
const ITEM_HEIGHT: u64 = 100;
const VIEWPORT_HEIGHT: u64 = 720;

/// `outerHTML` of a list item shaped like a rendered playlist entry.
pub fn playlist_item(title: &str, views_text: &str, thumbnail: &str) -> String {
    let image = if thumbnail.is_empty() {
        "<img>".to_string()
    } else {
        format!(r#"<img src="{}">"#, thumbnail)
    };

    format!(
        concat!(
            "<ytd-playlist-video-renderer>",
            r#"<a id="thumbnail">{image}</a>"#,
            r#"<div id="meta">"#,
            "<a id=\"video-title\">\n  {title}\n</a>",
            r#"<div id="video-info"><span>{views}</span><span>•</span></div>"#,
            "</div>",
            "</ytd-playlist-video-renderer>"
        ),
        image = image,
        title = title,
        views = views_text,
    )
}

/// Replays a playlist whose items appear in batches as the page is scrolled.
#[derive(Debug, Clone, Default)]
pub struct SnapshotDriver {
    batches: Vec<Vec<String>>,
    revealed: usize,
    repeat_last_batch: bool,
    fail_scroll_after: Option<u32>,
    navigated: Option<String>,
    scroll_calls: u32,
    measure_calls: u32,
}

impl SnapshotDriver {
    /// A page that renders `batches[0]` up front and one more batch per scroll.
    pub fn new(batches: Vec<Vec<String>>) -> Self {
        Self {
            revealed: usize::from(!batches.is_empty()),
            batches,
            ..Self::default()
        }
    }

    /// A page with every item already rendered.
    pub fn from_items(items: Vec<String>) -> Self {
        Self::new(vec![items])
    }

    /// Keep appending the last batch forever, like a feed that never ends.
    pub fn growing_forever(mut self) -> Self {
        self.repeat_last_batch = true;
        self
    }

    /// Fail every scroll after `n` successful ones.
    pub fn fail_scroll_after(mut self, n: u32) -> Self {
        self.fail_scroll_after = Some(n);
        self
    }

    pub fn navigated_url(&self) -> Option<&str> {
        self.navigated.as_deref()
    }

    pub fn scroll_calls(&self) -> u32 {
        self.scroll_calls
    }

    pub fn measure_calls(&self) -> u32 {
        self.measure_calls
    }

    /// Items currently rendered, in document order.
    pub fn rendered_items(&self) -> Vec<String> {
        let revealed = self.revealed.min(self.batches.len());
        let mut items: Vec<String> = self.batches[..revealed].iter().flatten().cloned().collect();
        if self.repeat_last_batch && self.revealed > self.batches.len() {
            if let Some(last) = self.batches.last() {
                for _ in self.batches.len()..self.revealed {
                    items.extend(last.iter().cloned());
                }
            }
        }
        items
    }

    fn document(&self) -> String {
        format!(
            r#"<html><body><div id="masthead"></div><div id="contents">{}</div></body></html>"#,
            self.rendered_items().concat()
        )
    }

    fn select(&self, selector: &str) -> Result<Vec<String>, DriverError> {
        let parsed = parse_selector(selector).map_err(|e| DriverError::Script(e.to_string()))?;
        Ok(select_outer_html(&self.document(), &parsed))
    }

    fn height(&self) -> u64 {
        HEADER_HEIGHT + self.rendered_items().len() as u64 * ITEM_HEIGHT
    }

    fn has_more(&self) -> bool {
        self.revealed < self.batches.len() || (self.repeat_last_batch && !self.batches.is_empty())
    }
}

#[async_trait]
impl PageDriver for SnapshotDriver {
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        self.navigated = Some(url.to_string());
        Ok(())
    }

    async fn wait_for_selector(
        &mut self,
        selector: &str,
        timeout_ms: u64,
    ) -> Result<(), DriverError> {
        if !self.select(selector)?.is_empty() {
            return Ok(());
        }

        tokio::time::sleep(Duration::from_millis(timeout_ms)).await;
        Err(DriverError::Timeout(format!(
            "Waiting for selector '{}' timed out",
            selector
        )))
    }

    async fn scroll_height(&mut self) -> Result<u64, DriverError> {
        self.measure_calls += 1;
        Ok(self.height())
    }

    async fn scroll_to(&mut self, height: u64) -> Result<(), DriverError> {
        if self.fail_scroll_after.is_some_and(|n| self.scroll_calls >= n) {
            return Err(DriverError::SessionClosed);
        }
        self.scroll_calls += 1;

        if height + VIEWPORT_HEIGHT >= self.height() && self.has_more() {
            self.revealed += 1;
        }
        Ok(())
    }

    async fn query_all(&mut self, selector: &str) -> Result<Vec<String>, DriverError> {
        self.select(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(prefix: &str, n: usize) -> Vec<String> {
        (0..n)
            .map(|i| playlist_item(&format!("{} {}", prefix, i), "1 view", ""))
            .collect()
    }

    #[tokio::test]
    async fn test_scroll_reveals_next_batch() {
        let mut driver = SnapshotDriver::new(vec![batch("a", 2), batch("b", 3)]);
        let h0 = driver.scroll_height().await.unwrap();
        assert_eq!(h0, HEADER_HEIGHT + 2 * ITEM_HEIGHT);

        driver.scroll_to(h0).await.unwrap();
        assert_eq!(driver.scroll_height().await.unwrap(), HEADER_HEIGHT + 5 * ITEM_HEIGHT);

        driver.scroll_to(h0 + 300).await.unwrap();
        assert_eq!(driver.rendered_items().len(), 5);
    }

    #[tokio::test]
    async fn test_scroll_near_top_reveals_nothing() {
        let items: Vec<Vec<String>> = vec![batch("a", 20), batch("b", 1)];
        let mut driver = SnapshotDriver::new(items);
        driver.scroll_to(0).await.unwrap();
        assert_eq!(driver.rendered_items().len(), 20);
    }

    #[tokio::test]
    async fn test_query_all_scoped_to_container() {
        let mut driver = SnapshotDriver::from_items(batch("a", 3));
        let items = driver
            .query_all("#contents ytd-playlist-video-renderer")
            .await
            .unwrap();
        assert_eq!(items.len(), 3);
        assert!(items[0].contains("a 0"));
        assert!(driver.query_all("#masthead ytd-playlist-video-renderer").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_all_child_combinator() {
        let mut driver = SnapshotDriver::from_items(batch("a", 2));
        let items = driver
            .query_all("#contents > ytd-playlist-video-renderer")
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_selector_is_script_error() {
        let mut driver = SnapshotDriver::from_items(batch("a", 1));
        let result = driver.query_all("#contents >").await;
        assert!(matches!(result, Err(DriverError::Script(_))));
    }

    #[tokio::test]
    async fn test_growing_forever() {
        let mut driver = SnapshotDriver::from_items(batch("a", 1)).growing_forever();
        for _ in 0..4 {
            let h = driver.scroll_height().await.unwrap();
            driver.scroll_to(h).await.unwrap();
        }
        assert_eq!(driver.rendered_items().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_missing_selector_times_out() {
        let mut driver = SnapshotDriver::new(vec![]);
        let result = driver
            .wait_for_selector("#contents ytd-playlist-video-renderer", 5000)
            .await;
        assert!(matches!(result, Err(DriverError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_fail_scroll_after() {
        let mut driver = SnapshotDriver::from_items(batch("a", 1)).fail_scroll_after(1);
        assert!(driver.scroll_to(0).await.is_ok());
        assert!(matches!(driver.scroll_to(0).await, Err(DriverError::SessionClosed)));
    }
}
