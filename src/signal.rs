//! OS signal handling.

use playscrape_core::CancellationToken;
use tracing::info;

/// Cancel `shutdown` on the first SIGTERM or SIGINT.
#[cfg(unix)]
pub(crate) fn install_shutdown_handler(shutdown: CancellationToken) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => info!("Received SIGTERM"),
            _ = sigint.recv() => info!("Received SIGINT"),
            _ = shutdown.cancelled() => return,
        }
        shutdown.cancel();
    });

    info!("OS signal handlers installed (SIGTERM, SIGINT)");
    Ok(())
}

/// Cancel `shutdown` on Ctrl+C.
#[cfg(not(unix))]
pub(crate) fn install_shutdown_handler(shutdown: CancellationToken) -> std::io::Result<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    info!("Received Ctrl+C");
                    shutdown.cancel();
                }
            }
            _ = shutdown.cancelled() => {}
        }
    });

    info!("OS signal handlers installed (Ctrl+C only)");
    Ok(())
}
