use serde::{Deserialize, Serialize};

/// Summary of one encyclopedia page, as shown in a popup.
///
/// Errors and "no such page" outcomes are also carried in this record, with
/// the human-readable message in `extract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub title: String,
    /// HTML-safe intro text
    pub extract: String,
    pub thumbnail_url: Option<String>,
}

impl LookupResult {
    pub fn new(title: impl Into<String>, extract: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extract: extract.into(),
            thumbnail_url: None,
        }
    }

    pub fn with_thumbnail(mut self, url: Option<String>) -> Self {
        self.thumbnail_url = url;
        self
    }
}
