//! Interface server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::http::routes::create_router;
use crate::service::PlaylistScraper;

/// Interface server configuration.
#[derive(Debug, Clone)]
pub struct InterfaceConfig {
    pub host: String,
    pub port: u16,
}

impl InterfaceConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// The interface server.
pub struct InterfaceServer {
    config: InterfaceConfig,
    scraper: Arc<dyn PlaylistScraper>,
}

impl InterfaceServer {
    pub fn new(config: InterfaceConfig, scraper: Arc<dyn PlaylistScraper>) -> Self {
        Self { config, scraper }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Serve until `shutdown` fires, then drain in-flight requests.
    pub async fn run(&self, shutdown: CancellationToken) -> Result<(), Box<dyn std::error::Error>> {
        let addr: SocketAddr = self.addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(
        &self,
        listener: TcpListener,
        shutdown: CancellationToken,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(self.scraper.clone());

        info!("Interface server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        info!("Interface server stopped");
        Ok(())
    }
}
