use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::LookupError;

/// Top level of an `action=query&format=json` reply
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub query: Option<Query>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub pages: BTreeMap<String, Page>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    /// Present (usually as `""`) when the title does not exist
    pub missing: Option<serde_json::Value>,
    pub title: Option<String>,
    pub extract: Option<String>,
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub source: Option<String>,
}

impl QueryResponse {
    pub fn from_json(body: &str) -> Result<Self, LookupError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Only one title is ever requested, so the first page is the answer
    pub fn into_page(self) -> Result<Page, LookupError> {
        let query = self
            .query
            .ok_or_else(|| LookupError::Malformed("response has no 'query' object".into()))?;

        query
            .pages
            .into_values()
            .next()
            .ok_or_else(|| LookupError::Malformed("response has no pages".into()))
    }
}

impl Page {
    pub fn is_missing(&self) -> bool {
        self.missing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_flag_is_detected_from_empty_string() {
        let body = r#"{"batchcomplete":"","query":{"pages":{"-1":{"ns":0,"title":"Nope","missing":""}}}}"#;
        let page = QueryResponse::from_json(body).unwrap().into_page().unwrap();

        assert!(page.is_missing());
        assert_eq!(page.title.as_deref(), Some("Nope"));
    }

    #[test]
    fn response_without_query_is_malformed() {
        let body = r#"{"error":{"code":"badvalue"}}"#;
        let err = QueryResponse::from_json(body).unwrap().into_page().unwrap_err();

        assert!(matches!(err, LookupError::Malformed(_)));
    }

    #[test]
    fn empty_pages_is_malformed() {
        let body = r#"{"query":{"pages":{}}}"#;
        let err = QueryResponse::from_json(body).unwrap().into_page().unwrap_err();

        assert_eq!(err.to_extract(), "Unexpected error: response has no pages");
    }
}
