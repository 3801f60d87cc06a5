//! Incremental-reveal loader for virtualized lists.
//!
//! Scrolls to the bottom of the page, waits for the settle interval, and
//! re-measures until the content height stops changing. Iteration and
//! wall-clock ceilings turn a list that never stops growing into a partial
//! result instead of a hang.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::driver::{DriverError, PageDriver};

pub const DEFAULT_SCROLL_SETTLE_MS: u64 = 2000;
pub const DEFAULT_MAX_SCROLL_ITERATIONS: u32 = 200;
pub const DEFAULT_MAX_LOAD_MS: u64 = 120_000;

/// Loader timing and ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadLimits {
    /// Wait after each scroll before re-measuring.
    pub settle: Duration,
    /// Maximum number of scroll commands.
    pub max_iterations: u32,
    /// Maximum wall-clock time for the whole loop.
    pub max_duration: Duration,
}

impl Default for LoadLimits {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(DEFAULT_SCROLL_SETTLE_MS),
            max_iterations: DEFAULT_MAX_SCROLL_ITERATIONS,
            max_duration: Duration::from_millis(DEFAULT_MAX_LOAD_MS),
        }
    }
}

/// Loader state machine.
///
/// `Initial → Scrolling → Settled | TimedOut | Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Initial,
    Scrolling,
    /// Two consecutive measurements were equal.
    Settled,
    /// An iteration or wall-clock ceiling was reached.
    TimedOut,
    /// The caller's cancellation token fired.
    Cancelled,
}

impl LoadState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Settled | Self::TimedOut | Self::Cancelled)
    }
}

/// Result of a loader run. Every terminal state is usable for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadOutcome {
    pub state: LoadState,
    /// Scroll commands issued.
    pub iterations: u32,
    /// Last measured content height.
    pub final_height: u64,
    #[serde(with = "duration_ms")]
    pub elapsed: Duration,
}

impl LoadOutcome {
    /// Whether loading stopped before the list stabilized.
    pub fn is_partial(&self) -> bool {
        self.state != LoadState::Settled
    }
}

/// Drives one page until its list stops growing.
pub struct Loader<'a, D: PageDriver + ?Sized> {
    driver: &'a mut D,
    limits: LoadLimits,
    state: LoadState,
    last_height: u64,
    iterations: u32,
}

impl<'a, D: PageDriver + ?Sized> Loader<'a, D> {
    pub fn new(driver: &'a mut D, limits: LoadLimits) -> Self {
        Self {
            driver,
            limits,
            state: LoadState::Initial,
            last_height: 0,
            iterations: 0,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Run to a terminal state.
    ///
    /// Only driver failures are errors; ceilings and cancellation return an
    /// outcome whose `is_partial()` is true.
    pub async fn run(&mut self, cancel: &CancellationToken) -> Result<LoadOutcome, DriverError> {
        let started = Instant::now();
        let deadline = started + self.limits.max_duration;

        self.last_height = self.driver.scroll_height().await?;
        debug!("Initial content height: {}", self.last_height);

        loop {
            if cancel.is_cancelled() {
                return Ok(self.finish(LoadState::Cancelled, started));
            }
            if self.iterations >= self.limits.max_iterations || Instant::now() >= deadline {
                return Ok(self.finish(LoadState::TimedOut, started));
            }

            self.state = LoadState::Scrolling;
            self.driver.scroll_to(self.last_height).await?;
            self.iterations += 1;

            tokio::select! {
                _ = tokio::time::sleep(self.limits.settle) => {}
                _ = tokio::time::sleep_until(deadline) => {
                    return Ok(self.finish(LoadState::TimedOut, started));
                }
                _ = cancel.cancelled() => {
                    return Ok(self.finish(LoadState::Cancelled, started));
                }
            }

            let height = self.driver.scroll_height().await?;
            debug!(
                "Scroll iteration {}: height {} -> {}",
                self.iterations, self.last_height, height
            );

            if height == self.last_height {
                return Ok(self.finish(LoadState::Settled, started));
            }
            self.last_height = height;
        }
    }

    fn finish(&mut self, state: LoadState, started: Instant) -> LoadOutcome {
        self.state = state;
        let outcome = LoadOutcome {
            state,
            iterations: self.iterations,
            final_height: self.last_height,
            elapsed: started.elapsed(),
        };

        match state {
            LoadState::Settled => info!(
                "List settled after {} scroll(s) at height {}",
                outcome.iterations, outcome.final_height
            ),
            _ => warn!(
                "Loading stopped early ({:?}) after {} scroll(s) in {:?}; keeping rendered items",
                state, outcome.iterations, outcome.elapsed
            ),
        }
        outcome
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
