//! BrowserManager core: struct definition, new, connect, chrome management.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::process::{Child, Command};
use tokio::sync::{RwLock, Semaphore};
use tracing::{info, warn};

use crate::cdp::CdpClient;
use super::{BrowserError, BrowserManagerConfig};

const LAUNCH_POLL_INTERVAL: Duration = Duration::from_millis(200);
const LAUNCH_MAX_ATTEMPTS: u32 = 30;

/// Manages the browser connection and the page pool.
pub struct BrowserManager {
    pub(super) config: BrowserManagerConfig,
    pub(super) client: RwLock<Option<Arc<CdpClient>>>,
    /// One permit per page that may be open at once.
    pub(super) permits: Arc<Semaphore>,
    /// Chrome process handle (if we launched it).
    pub(super) chrome_process: RwLock<Option<Child>>,
}

impl BrowserManager {
    /// Create a new browser manager. Nothing is launched until first use.
    pub fn new(config: BrowserManagerConfig) -> Self {
        let permits = Arc::new(Semaphore::new(config.max_pages.max(1)));
        Self {
            config,
            client: RwLock::new(None),
            permits,
            chrome_process: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &BrowserManagerConfig {
        &self.config
    }

    /// Find Chrome executable path.
    pub fn find_chrome() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            let paths = [
                "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
                "/Applications/Chromium.app/Contents/MacOS/Chromium",
                "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        #[cfg(target_os = "linux")]
        {
            let paths = [
                "/usr/bin/google-chrome",
                "/usr/bin/google-chrome-stable",
                "/usr/bin/chromium",
                "/usr/bin/chromium-browser",
                "/snap/bin/chromium",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        #[cfg(target_os = "windows")]
        {
            let paths = [
                r"C:\Program Files\Google\Chrome\Application\chrome.exe",
                r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        None
    }

    /// The configured executable if set, otherwise a well-known install location.
    pub(super) fn chrome_path(&self) -> Result<PathBuf, BrowserError> {
        match &self.config.chrome_path {
            Some(path) if path.exists() => Ok(path.clone()),
            Some(path) => Err(BrowserError::LaunchFailed(format!(
                "configured chrome_path does not exist: {}",
                path.display()
            ))),
            None => Self::find_chrome().ok_or(BrowserError::ChromeNotFound),
        }
    }

    /// Check if Chrome is already running on the debug port.
    pub(super) async fn is_chrome_running(&self) -> bool {
        reqwest::get(&format!("{}/json/version", self.config.endpoint()))
            .await
            .is_ok()
    }

    /// Launch Chrome with remote debugging enabled.
    pub(super) async fn launch_chrome(&self) -> Result<Child, BrowserError> {
        let chrome_path = self.chrome_path()?;
        let profile_dir = self.config.get_profile_dir();

        if let Err(e) = std::fs::create_dir_all(&profile_dir) {
            warn!("Failed to create profile directory: {}", e);
        }

        info!("Launching Chrome with profile at: {}", profile_dir.display());

        let mut cmd = Command::new(&chrome_path);
        cmd.arg(format!("--remote-debugging-port={}", self.config.debug_port))
            .arg(format!("--user-data-dir={}", profile_dir.display()))
            .arg(format!(
                "--window-size={},{}",
                self.config.viewport_width, self.config.viewport_height
            ))
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--disable-background-networking")
            .arg("--disable-sync")
            .arg("--disable-translate")
            .arg("--mute-audio")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        if self.config.headless {
            cmd.arg("--headless=new");
        }

        let child = cmd
            .spawn()
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        info!("Chrome launched with PID: {:?}", child.id());
        Ok(child)
    }

    /// Connect to the browser, launching it if necessary.
    ///
    /// A dropped connection is replaced on the next call.
    pub async fn connect(&self) -> Result<(), BrowserError> {
        let mut client = self.client.write().await;
        if client.as_ref().is_some_and(|c| c.is_connected()) {
            return Ok(());
        }
        if client.take().is_some() {
            warn!("Browser connection lost, reconnecting");
        }

        if !self.is_chrome_running().await {
            info!("Chrome not running on port {}, launching...", self.config.debug_port);

            let child = self.launch_chrome().await?;
            *self.chrome_process.write().await = Some(child);

            let mut attempts = 0;
            while attempts < LAUNCH_MAX_ATTEMPTS {
                tokio::time::sleep(LAUNCH_POLL_INTERVAL).await;
                if self.is_chrome_running().await {
                    break;
                }
                attempts += 1;
            }

            if attempts >= LAUNCH_MAX_ATTEMPTS {
                return Err(BrowserError::LaunchFailed(
                    "Chrome failed to start within timeout".to_string(),
                ));
            }
        } else {
            info!("Chrome already running on port {}", self.config.debug_port);
        }

        let connected = CdpClient::connect(&self.config.endpoint()).await?;
        *client = Some(Arc::new(connected));

        info!("Connected to Chrome at {}", self.config.endpoint());
        Ok(())
    }

    /// Get the CDP client, connecting first if needed.
    pub(super) async fn client(&self) -> Result<Arc<CdpClient>, BrowserError> {
        self.connect().await?;
        self.client
            .read()
            .await
            .clone()
            .ok_or(BrowserError::NotConnected)
    }

    /// Pages currently leased.
    pub fn active_pages(&self) -> usize {
        self.config.max_pages.max(1) - self.permits.available_permits()
    }

    /// Close the browser connection.
    pub async fn close(&self) -> Result<(), BrowserError> {
        let _ = self.client.write().await.take();
        info!("Browser connection closed");
        Ok(())
    }

    /// Stop handing out pages, disconnect, and stop Chrome if we launched it.
    pub async fn shutdown(&self) -> Result<(), BrowserError> {
        self.permits.close();
        self.close().await?;
        if let Some(mut child) = self.chrome_process.write().await.take() {
            info!("Shutting down Chrome...");
            let _ = child.kill().await;
        }
        Ok(())
    }
}
