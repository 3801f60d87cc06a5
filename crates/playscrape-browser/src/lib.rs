//! Chrome page driver for playscrape.
//!
//! Drives Chrome over the DevTools Protocol (CDP) and hands out exclusive,
//! pooled pages that implement [`playscrape_core::PageDriver`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    WebSocket     ┌──────────────────┐
//! │ BrowserManager  │ ◄──────────────► │   Chrome/Edge    │
//! │  └─ PageLease   │       CDP        │  (headless tab)  │
//! └─────────────────┘                  └──────────────────┘
//! ```
//!
//! ## Setup
//!
//! The manager launches Chrome itself when nothing is listening on the debug
//! port. To reuse a running browser instead, start it with remote debugging:
//!
//! ```bash
//! # macOS
//! /Applications/Google\ Chrome.app/Contents/MacOS/Google\ Chrome --remote-debugging-port=9222
//!
//! # Linux
//! google-chrome --remote-debugging-port=9222
//! ```
//!
//! ## Page leases
//!
//! Every scrape gets its own tab through [`BrowserManager::acquire`]. The
//! number of open tabs is bounded by `max_pages`; a lease closes its tab when
//! released or dropped.

pub mod cdp;
mod driver;
pub mod manager;

pub use manager::{BrowserError, BrowserManager, BrowserManagerConfig, PageLease};
