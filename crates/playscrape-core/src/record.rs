//! Output records.

use serde::{Deserialize, Serialize};

use crate::count::parse_view_count;

/// One playlist entry as rendered on the page.
///
/// Serialized with the field names of the HTTP API
/// (`title`, `views`, `thumbnail`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    #[serde(rename = "views")]
    pub view_count: u64,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
}

/// Raw strings read from a single list item before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItemText {
    pub title: Option<String>,
    pub views: Option<String>,
    pub thumbnail_src: Option<String>,
}

impl RawItemText {
    /// Normalize into a record; every missing field falls back to its default.
    pub fn into_record(self) -> VideoRecord {
        VideoRecord {
            title: self.title.map(|t| t.trim().to_string()).unwrap_or_default(),
            view_count: self.views.as_deref().map(parse_view_count).unwrap_or(0),
            thumbnail_url: self.thumbnail_src.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_record_defaults() {
        let record = RawItemText::default().into_record();
        assert_eq!(record.title, "");
        assert_eq!(record.view_count, 0);
        assert_eq!(record.thumbnail_url, "");
    }

    #[test]
    fn test_into_record_trims_title() {
        let raw = RawItemText {
            title: Some("\n   Intro video  \n".to_string()),
            views: Some("10,000 views".to_string()),
            thumbnail_src: Some("https://i.ytimg.com/vi/a/hq.jpg".to_string()),
        };
        let record = raw.into_record();
        assert_eq!(record.title, "Intro video");
        assert_eq!(record.view_count, 10_000);
        assert_eq!(record.thumbnail_url, "https://i.ytimg.com/vi/a/hq.jpg");
    }

    #[test]
    fn test_record_serializes_compat_names() {
        let record = VideoRecord {
            title: "Part 2".to_string(),
            view_count: 1_500_000,
            thumbnail_url: "t.jpg".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Part 2", "views": 1500000, "thumbnail": "t.jpg"})
        );
    }
}
