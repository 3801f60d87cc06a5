//! Scrape selectors and loader timing.

use serde::{Deserialize, Serialize};

/// Scrape configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Selects every list item in the document.
    #[serde(default = "default_list_item_selector")]
    pub list_item_selector: String,

    /// The remaining selectors are evaluated inside one list item.
    #[serde(default = "default_title_selector")]
    pub title_selector: String,

    #[serde(default = "default_metadata_selector")]
    pub metadata_selector: String,

    /// Evaluated inside the metadata element.
    #[serde(default = "default_views_selector")]
    pub views_selector: String,

    #[serde(default = "default_thumbnail_selector")]
    pub thumbnail_selector: String,

    #[serde(default = "default_initial_selector_timeout_ms")]
    pub initial_selector_timeout_ms: u64,

    #[serde(default = "default_scroll_settle_ms")]
    pub scroll_settle_ms: u64,

    #[serde(default = "default_max_scroll_iterations")]
    pub max_scroll_iterations: u32,

    #[serde(default = "default_max_load_ms")]
    pub max_load_ms: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            list_item_selector: default_list_item_selector(),
            title_selector: default_title_selector(),
            metadata_selector: default_metadata_selector(),
            views_selector: default_views_selector(),
            thumbnail_selector: default_thumbnail_selector(),
            initial_selector_timeout_ms: default_initial_selector_timeout_ms(),
            scroll_settle_ms: default_scroll_settle_ms(),
            max_scroll_iterations: default_max_scroll_iterations(),
            max_load_ms: default_max_load_ms(),
        }
    }
}

impl ScrapeConfig {
    /// `(path, value)` for every selector, for validation and error messages.
    pub fn selectors(&self) -> [(&'static str, &str); 5] {
        [
            ("scrape.list_item_selector", self.list_item_selector.as_str()),
            ("scrape.title_selector", self.title_selector.as_str()),
            ("scrape.metadata_selector", self.metadata_selector.as_str()),
            ("scrape.views_selector", self.views_selector.as_str()),
            ("scrape.thumbnail_selector", self.thumbnail_selector.as_str()),
        ]
    }
}

fn default_list_item_selector() -> String {
    "#contents ytd-playlist-video-renderer".to_string()
}

fn default_title_selector() -> String {
    "#video-title".to_string()
}

fn default_metadata_selector() -> String {
    "#video-info".to_string()
}

fn default_views_selector() -> String {
    "span".to_string()
}

fn default_thumbnail_selector() -> String {
    "img".to_string()
}

fn default_initial_selector_timeout_ms() -> u64 {
    30_000
}

fn default_scroll_settle_ms() -> u64 {
    2000
}

fn default_max_scroll_iterations() -> u32 {
    200
}

fn default_max_load_ms() -> u64 {
    120_000
}
