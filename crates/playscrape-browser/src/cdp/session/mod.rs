//! CDP page session for interacting with a single page.

mod core;
mod js;
mod navigation;

pub use self::core::PageSession;
pub(crate) use self::js::js_string;
