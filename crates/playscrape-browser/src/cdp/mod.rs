//! Chrome DevTools Protocol (CDP) client.
//!
//! Connects to Chrome over WebSocket and speaks the CDP JSON-RPC protocol.
//! Only the Target, Page, Runtime and Emulation domains are used.
//!
//! ```rust,ignore
//! let client = CdpClient::connect("http://localhost:9222").await?;
//! let page = client.new_page().await?;
//! page.navigate("https://example.com").await?;
//! ```

mod client;
mod error;
mod protocol;
mod session;

pub use client::CdpClient;
pub use error::CdpError;
pub use protocol::*;
pub use session::PageSession;
pub(crate) use session::js_string;
