//! Browser process and page pool.
//!
//! Launches Chrome on demand (or reuses one already listening on the debug
//! port) and hands out exclusive page leases, bounded by `max_pages`.

mod manager_core;
mod manager_lease;
mod manager_types;

pub use manager_core::BrowserManager;
pub use manager_lease::PageLease;
pub use manager_types::{BrowserError, BrowserManagerConfig};

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
