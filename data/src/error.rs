use serde::Deserialize;
use thiserror::Error;

/// Everything that can go wrong between submitting a term and holding results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("No Unsplash access key configured (set UNSPLASH_ACCESS_KEY at build time)")]
    MissingAccessKey,

    #[error("Could not encode search parameters: {0}")]
    Encode(String),

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Search service answered {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Could not read search results: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ApiErrors {
    errors: Vec<String>,
}

impl SearchError {
    /// Builds a `Status` error from a non-2xx answer, pulling the messages out
    /// of an `{"errors": [...]}` body when there is one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrors>(body) {
            Ok(api) if !api.errors.is_empty() => api.errors.join("; "),
            _ if body.trim().is_empty() => "no details".to_string(),
            _ => body.trim().to_string(),
        };
        SearchError::Status { status, message }
    }
}
