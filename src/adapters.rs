//! Config-to-engine adapters and utility functions for playscrape.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

use playscrape_browser::BrowserManagerConfig;
use playscrape_config::{BrowserConfig, Config, ConfigError, ConfigLoader, ConfigValidator, ScrapeConfig};
use playscrape_core::{parse_selector, ItemSelectors, LoadLimits, ScrapeError, ScrapeOptions};

/// Get the .playscrape directory path.
pub(crate) fn playscrape_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".playscrape"))
        .unwrap_or_else(|| PathBuf::from(".playscrape"))
}

/// Load and validate the configuration.
///
/// A missing file falls back to defaults. Warnings are logged; the first
/// validation error is returned.
pub(crate) fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let (config, found) = ConfigLoader::load_or_default(path)?;
    if found {
        info!("Loaded configuration from {}", path.display());
    } else {
        info!("No configuration at {}, using defaults", path.display());
    }

    let result = ConfigValidator::validate(&config);
    for warning in &result.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    match result.first_error() {
        Some(e) => Err(e),
        None => Ok(config),
    }
}

pub(crate) fn browser_manager_config(config: &BrowserConfig) -> BrowserManagerConfig {
    BrowserManagerConfig {
        debug_port: config.debug_port,
        viewport_width: config.viewport_width,
        viewport_height: config.viewport_height,
        profile_dir: config.profile_dir.clone(),
        chrome_path: config.chrome_path.clone(),
        headless: config.headless,
        max_pages: config.max_pages,
    }
}

/// Build engine options, rejecting any selector that is not valid CSS.
pub(crate) fn scrape_options(config: &ScrapeConfig) -> Result<ScrapeOptions, ScrapeError> {
    parse_selector(&config.list_item_selector)?;

    Ok(ScrapeOptions {
        list_item_selector: config.list_item_selector.clone(),
        item_selectors: ItemSelectors::new(
            &config.title_selector,
            &config.metadata_selector,
            &config.views_selector,
            &config.thumbnail_selector,
        )?,
        initial_selector_timeout_ms: config.initial_selector_timeout_ms,
        limits: LoadLimits {
            settle: Duration::from_millis(config.scroll_settle_ms),
            max_iterations: config.max_scroll_iterations,
            max_duration: Duration::from_millis(config.max_load_ms),
        },
    })
}
