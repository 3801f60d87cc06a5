//! Server initialization and startup logic for playscrape.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use playscrape_api::{InterfaceConfig, InterfaceServer, PlaylistService};
use playscrape_browser::BrowserManager;
use playscrape_config::Config;
use playscrape_core::CancellationToken;

use crate::adapters::{browser_manager_config, playscrape_dir, scrape_options};
use crate::signal::install_shutdown_handler;

/// Initialize tracing with console and file output.
///
/// Log files are written to ~/.playscrape/logs/ with daily rotation. Console
/// output goes to stderr so command results on stdout stay clean.
pub(crate) fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = playscrape_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("playscrape")
        .filename_suffix("log")
        .max_log_files(30) // Keep 30 days of logs
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the writer alive for the program duration
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(true)
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
        )
        .init();

    Ok(())
}

/// Run the HTTP server in foreground until SIGTERM/SIGINT.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting playscrape v{}", env!("CARGO_PKG_VERSION"));

    let options = scrape_options(&config.scrape)?;
    let manager = Arc::new(BrowserManager::new(browser_manager_config(&config.browser)));
    info!(
        "Browser pool: up to {} page(s), Chrome debug port {}",
        config.browser.max_pages, config.browser.debug_port
    );

    let shutdown = CancellationToken::new();
    install_shutdown_handler(shutdown.clone())?;

    let service = PlaylistService::new(
        manager.clone(),
        options,
        Duration::from_millis(config.server.request_timeout_ms),
        shutdown.clone(),
    );
    let server = InterfaceServer::new(
        InterfaceConfig::new(config.server.host.clone(), config.server.port),
        Arc::new(service),
    );

    info!("playscrape ready:");
    info!("  API Server:    http://{}", server.addr());
    info!("");
    info!("API Endpoints:");
    info!("  POST /api/scrape-playlist - Scrape a playlist");
    info!("  GET  /livez               - Liveness probe");

    // Blocks until shutdown
    let result = server.run(shutdown).await;

    info!("Shutting down...");
    if let Err(e) = manager.shutdown().await {
        error!("Browser shutdown failed: {}", e);
    }
    result
}
