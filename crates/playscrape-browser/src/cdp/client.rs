//! CDP WebSocket client.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, trace, warn};

use super::error::CdpError;
use super::protocol::{BrowserVersion, CdpRequest, CdpResponse, PageInfo};
use super::session::PageSession;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;

/// Upper bound on a single CDP round trip.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Pending request waiting for response.
struct PendingRequest {
    tx: oneshot::Sender<Result<Value, CdpError>>,
}

/// The browser WebSocket shared by the client and all of its page sessions.
pub(crate) struct Transport {
    ws_tx: tokio::sync::Mutex<WsSink>,
    request_id: AtomicU64,
    pending: Mutex<HashMap<u64, PendingRequest>>,
    closed: AtomicBool,
}

impl Transport {
    /// Send a CDP command and wait for its response.
    pub(crate) async fn call(
        &self,
        method: &str,
        params: Option<Value>,
        session_id: Option<&str>,
    ) -> Result<Value, CdpError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(CdpError::SessionClosed);
        }

        let id = self.request_id.fetch_add(1, Ordering::SeqCst);
        let request = CdpRequest {
            id,
            method: method.to_string(),
            params,
            session_id: session_id.map(|s| s.to_string()),
        };

        let json = serde_json::to_string(&request)?;
        trace!("CDP send: {}", json);

        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(id, PendingRequest { tx });

        {
            let mut ws = self.ws_tx.lock().await;
            if let Err(e) = ws.send(Message::Text(json.into())).await {
                self.pending.lock().remove(&id);
                return Err(e.into());
            }
        }

        match tokio::time::timeout(COMMAND_TIMEOUT, rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(CdpError::SessionClosed),
            Err(_) => {
                self.pending.lock().remove(&id);
                Err(CdpError::Timeout(format!("Request {} timed out", method)))
            }
        }
    }

    fn dispatch(&self, resp: CdpResponse) {
        if let Some(id) = resp.id {
            let pending_req = self.pending.lock().remove(&id);
            if let Some(req) = pending_req {
                let result = match resp.error {
                    Some(error) => Err(CdpError::Command {
                        code: error.code,
                        message: error.message,
                    }),
                    None => Ok(resp.result.unwrap_or(Value::Null)),
                };
                let _ = req.tx.send(result);
            }
        } else if let Some(method) = resp.method {
            trace!(
                "CDP event {} (session {})",
                method,
                resp.session_id.as_deref().unwrap_or("-")
            );
        }
    }

    /// Fail every in-flight request once the socket is gone.
    fn shut(&self) {
        self.closed.store(true, Ordering::SeqCst);
        let drained: Vec<PendingRequest> = self.pending.lock().drain().map(|(_, r)| r).collect();
        for req in drained {
            let _ = req.tx.send(Err(CdpError::SessionClosed));
        }
    }
}

/// CDP client for one browser.
pub struct CdpClient {
    /// HTTP endpoint for target management.
    http_endpoint: String,
    /// Browser WebSocket URL.
    browser_ws_url: String,
    http: reqwest::Client,
    transport: Arc<Transport>,
    /// Background task handle.
    recv_task: tokio::task::JoinHandle<()>,
}

impl CdpClient {
    /// Connect to Chrome at the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Chrome debugging endpoint (e.g., "http://localhost:9222")
    pub async fn connect(endpoint: &str) -> Result<Self, CdpError> {
        let http_endpoint = url::Url::parse(endpoint)?
            .as_str()
            .trim_end_matches('/')
            .to_string();

        let version_url = format!("{}/json/version", http_endpoint);
        debug!("Fetching browser version from {}", version_url);

        let http = reqwest::Client::new();
        let version: BrowserVersion = http
            .get(&version_url)
            .send()
            .await
            .map_err(|e| CdpError::Unreachable(format!("{}: {}", endpoint, e)))?
            .json()
            .await
            .map_err(|e| CdpError::Unreachable(format!("{}: {}", endpoint, e)))?;

        debug!("Connected to browser: {}", version.browser);

        let browser_ws_url = version.web_socket_debugger_url;

        let (ws_stream, _) = tokio_tungstenite::connect_async(&browser_ws_url)
            .await
            .map_err(|e| {
                CdpError::Unreachable(format!("{} (WebSocket): {}", browser_ws_url, e))
            })?;

        let (ws_sink, ws_source) = ws_stream.split();
        let transport = Arc::new(Transport {
            ws_tx: tokio::sync::Mutex::new(ws_sink),
            request_id: AtomicU64::new(1),
            pending: Mutex::new(HashMap::new()),
            closed: AtomicBool::new(false),
        });

        let recv_task = {
            let transport = transport.clone();
            tokio::spawn(async move {
                Self::receive_loop(ws_source, &transport).await;
                transport.shut();
            })
        };

        debug!("CDP client connected to {}", browser_ws_url);

        Ok(Self {
            http_endpoint,
            browser_ws_url,
            http,
            transport,
            recv_task,
        })
    }

    /// WebSocket receive loop.
    async fn receive_loop(mut ws_source: WsSource, transport: &Transport) {
        while let Some(msg) = ws_source.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    trace!("CDP recv: {}", text);
                    match serde_json::from_str::<CdpResponse>(&text) {
                        Ok(resp) => transport.dispatch(resp),
                        Err(e) => warn!("Failed to parse CDP message: {}", e),
                    }
                }
                Ok(Message::Close(_)) => {
                    debug!("WebSocket closed");
                    break;
                }
                Err(e) => {
                    error!("WebSocket error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    }

    /// Send a browser-level CDP command.
    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, CdpError> {
        self.transport.call(method, params, None).await
    }

    /// Whether the WebSocket is still open.
    pub fn is_connected(&self) -> bool {
        !self.transport.closed.load(Ordering::SeqCst) && !self.recv_task.is_finished()
    }

    /// Get browser WebSocket URL.
    pub fn browser_ws_url(&self) -> &str {
        &self.browser_ws_url
    }

    // ========================================================================
    // Target Management
    // ========================================================================

    /// Open a blank tab and attach a session to it.
    pub async fn new_page(&self) -> Result<PageSession, CdpError> {
        // Chrome requires PUT method for /json/new
        let create_url = format!("{}/json/new?about:blank", self.http_endpoint);
        let page_info: PageInfo = self.http.put(&create_url).send().await?.json().await?;
        debug!("Created new page: {}", page_info.id);

        let result = self
            .call(
                "Target.attachToTarget",
                Some(json!({
                    "targetId": page_info.id,
                    "flatten": true
                })),
            )
            .await;

        let session_id = match result {
            Ok(value) => value["sessionId"]
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| CdpError::InvalidResponse("Missing sessionId".to_string())),
            Err(e) => Err(e),
        };

        let session_id = match session_id {
            Ok(id) => id,
            Err(e) => {
                let _ = self.close_page(&page_info.id).await;
                return Err(e);
            }
        };

        let session = PageSession::new(page_info.id.clone(), session_id, self.transport.clone());
        if let Err(e) = session.enable_domains().await {
            let _ = self.close_page(&page_info.id).await;
            return Err(e);
        }

        Ok(session)
    }

    /// Close a page/target.
    pub async fn close_page(&self, target_id: &str) -> Result<(), CdpError> {
        self.call(
            "Target.closeTarget",
            Some(json!({"targetId": target_id})),
        )
        .await?;
        debug!("Closed page {}", target_id);
        Ok(())
    }
}

impl Drop for CdpClient {
    fn drop(&mut self) {
        self.recv_task.abort();
        self.transport.shut();
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
