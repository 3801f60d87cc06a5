//! Record extraction from rendered list items.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::dom::{parse_selector, SelectorError};
use crate::record::{RawItemText, VideoRecord};

pub const DEFAULT_TITLE_SELECTOR: &str = "#video-title";
pub const DEFAULT_METADATA_SELECTOR: &str = "#video-info";
pub const DEFAULT_VIEWS_SELECTOR: &str = "span";
pub const DEFAULT_THUMBNAIL_SELECTOR: &str = "img";

/// Where each field lives inside a list item. Any CSS selector is accepted.
#[derive(Debug, Clone)]
pub struct ItemSelectors {
    /// Element whose trimmed text is the title.
    pub title: Selector,
    /// Container of the human-readable metadata line.
    pub metadata: Selector,
    /// First match inside `metadata` holds the view-count text.
    pub views: Selector,
    /// Element whose `src` attribute is the thumbnail URL.
    pub thumbnail: Selector,
}

impl ItemSelectors {
    pub fn new(
        title: &str,
        metadata: &str,
        views: &str,
        thumbnail: &str,
    ) -> Result<Self, SelectorError> {
        Ok(Self {
            title: parse_selector(title)?,
            metadata: parse_selector(metadata)?,
            views: parse_selector(views)?,
            thumbnail: parse_selector(thumbnail)?,
        })
    }

    /// Read the raw field strings from one item's `outerHTML`. Every lookup is optional.
    pub fn read(&self, item_html: &str) -> RawItemText {
        let fragment = Html::parse_fragment(item_html);
        let item = fragment.root_element();

        RawItemText {
            title: first(item, &self.title).map(text_content),
            views: first(item, &self.metadata)
                .and_then(|info| first(info, &self.views))
                .map(|span| text_content(span).trim().to_string()),
            thumbnail_src: first(item, &self.thumbnail)
                .and_then(|img| img.value().attr("src"))
                .map(str::to_string),
        }
    }
}

impl Default for ItemSelectors {
    fn default() -> Self {
        Self::new(
            DEFAULT_TITLE_SELECTOR,
            DEFAULT_METADATA_SELECTOR,
            DEFAULT_VIEWS_SELECTOR,
            DEFAULT_THUMBNAIL_SELECTOR,
        )
        .expect("default item selectors are valid")
    }
}

fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Build one record per item, preserving order.
pub fn extract_records(items: &[String], selectors: &ItemSelectors) -> Vec<VideoRecord> {
    let records: Vec<VideoRecord> = items
        .iter()
        .map(|item| selectors.read(item).into_record())
        .collect();

    debug!(
        "Extracted {} records ({} without views)",
        records.len(),
        records.iter().filter(|r| r.view_count == 0).count()
    );
    records
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
