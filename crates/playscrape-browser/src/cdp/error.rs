//! Failures of the CDP connection and the commands sent over it.

use thiserror::Error;

/// Errors surfaced by [`CdpClient`](super::CdpClient) and [`PageSession`](super::PageSession).
///
/// Variants are split along what the scraper does next: an unreachable
/// browser is reconnected, a closed session gets a fresh page, and the rest
/// are reported with the page that produced them.
#[derive(Debug, Error)]
pub enum CdpError {
    /// The debugging endpoint or its WebSocket could not be reached.
    #[error("Chrome unreachable at {0}")]
    Unreachable(String),

    /// Chrome answered a command with an error object.
    #[error("CDP command failed ({code}): {message}")]
    Command { code: i64, message: String },

    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// An evaluated script threw.
    #[error("Script threw: {0}")]
    Script(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    /// The socket dropped or the target went away.
    #[error("Session closed")]
    SessionClosed,

    /// A reply could not be encoded, decoded or had the wrong shape.
    #[error("Unexpected reply: {0}")]
    InvalidResponse(String),
}

impl From<tokio_tungstenite::tungstenite::Error> for CdpError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        tracing::debug!("WebSocket failure: {}", e);
        CdpError::SessionClosed
    }
}

impl From<serde_json::Error> for CdpError {
    fn from(e: serde_json::Error) -> Self {
        CdpError::InvalidResponse(e.to_string())
    }
}

impl From<reqwest::Error> for CdpError {
    fn from(e: reqwest::Error) -> Self {
        CdpError::Unreachable(e.to_string())
    }
}

impl From<url::ParseError> for CdpError {
    fn from(e: url::ParseError) -> Self {
        CdpError::Unreachable(format!("invalid endpoint URL ({})", e))
    }
}
