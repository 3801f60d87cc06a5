//! One-shot scrape and saved-page extraction commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use playscrape_api::{PlaylistScraper, PlaylistService, ScrapePlaylistResponse};
use playscrape_browser::BrowserManager;
use playscrape_config::Config;
use playscrape_core::{
    extract_records, parse_selector, select_outer_html, CancellationToken, ScrapeOptions,
};

use crate::adapters::{browser_manager_config, scrape_options};
use crate::signal::install_shutdown_handler;

/// Scrape one playlist with a private browser pool and emit the API response JSON.
pub(crate) async fn scrape(
    config: Config,
    url: String,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = scrape_options(&config.scrape)?;
    let manager = Arc::new(BrowserManager::new(browser_manager_config(&config.browser)));

    let shutdown = CancellationToken::new();
    install_shutdown_handler(shutdown.clone())?;

    let service = PlaylistService::new(
        manager.clone(),
        options,
        Duration::from_millis(config.server.request_timeout_ms),
        shutdown.clone(),
    );
    let result = service.scrape(&url).await;

    shutdown.cancel();
    if let Err(e) = manager.shutdown().await {
        error!("Browser shutdown failed: {}", e);
    }

    let report = result?;
    if report.is_partial() {
        warn!(
            "Playlist may be incomplete: loading stopped {:?} after {} scroll(s)",
            report.load.state, report.load.iterations
        );
    }
    info!("Scraped {} videos from {}", report.videos.len(), url);

    write_output(&ScrapePlaylistResponse::from(report), output.as_deref())
}

/// Run the extractor over a saved snapshot and emit the API response JSON.
pub(crate) fn extract(
    config: Config,
    snapshot: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = scrape_options(&config.scrape)?;
    let content = std::fs::read_to_string(&snapshot)?;
    let response = extract_snapshot(&content, &options)?;
    info!(
        "Extracted {} videos from {}",
        response.video_list.len(),
        snapshot.display()
    );
    write_output(&response, output.as_deref())
}

/// Accepts either a JSON array of list item `outerHTML` strings or a saved
/// HTML page, which is searched with the list item selector.
fn extract_snapshot(
    content: &str,
    options: &ScrapeOptions,
) -> Result<ScrapePlaylistResponse, Box<dyn std::error::Error>> {
    let items: Vec<String> = if content.trim_start().starts_with('[') {
        serde_json::from_str(content)?
    } else {
        let selector = parse_selector(&options.list_item_selector)?;
        select_outer_html(content, &selector)
    };

    let videos = extract_records(&items, &options.item_selectors);
    Ok(ScrapePlaylistResponse::from(videos))
}

fn write_output(
    response: &ScrapePlaylistResponse,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(response)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
