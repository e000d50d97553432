#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Transport failure, timeout or non-success HTTP status
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Body was not the expected `query.pages` JSON
    #[error("{0}")]
    Malformed(String),
}

impl LookupError {
    /// Text shown in place of the page extract
    pub fn to_extract(&self) -> String {
        match self {
            LookupError::Network(e) => format!("Error fetching content: {e}"),
            LookupError::Malformed(msg) => format!("Unexpected error: {msg}"),
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Malformed(e.to_string())
    }
}
