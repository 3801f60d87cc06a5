//! CSS selection over rendered HTML.
//!
//! Pages hand back every list item as its `outerHTML`. Per-item lookups then
//! run locally with `scraper`, so extraction is a pure function of that text.

use scraper::{Html, Selector};
use thiserror::Error;

/// A selector string that did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{selector}': {reason}")]
pub struct SelectorError {
    pub selector: String,
    pub reason: String,
}

/// Parse a CSS selector, keeping the source text for error reports.
pub fn parse_selector(selector: &str) -> Result<Selector, SelectorError> {
    if selector.trim().is_empty() {
        return Err(SelectorError {
            selector: selector.to_string(),
            reason: "empty selector".to_string(),
        });
    }

    Selector::parse(selector).map_err(|e| SelectorError {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// `outerHTML` of every element of `document` matching `selector`, in document order.
pub fn select_outer_html(document: &str, selector: &Selector) -> Vec<String> {
    Html::parse_document(document)
        .select(selector)
        .map(|el| el.html())
        .collect()
}
