//! Browser process and page pool settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::default_true;

/// Browser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_debug_port")]
    pub debug_port: u16,

    #[serde(default = "default_true")]
    pub headless: bool,

    /// Defaults to `~/.playscrape/browser-profile`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_dir: Option<PathBuf>,

    /// Searched in well-known install locations when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome_path: Option<PathBuf>,

    /// Concurrent scrape pages.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            debug_port: default_debug_port(),
            headless: true,
            profile_dir: None,
            chrome_path: None,
            max_pages: default_max_pages(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}

fn default_debug_port() -> u16 {
    9222
}

fn default_max_pages() -> usize {
    4
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_viewport_height() -> u32 {
    720
}
