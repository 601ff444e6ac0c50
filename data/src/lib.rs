pub mod config;
pub mod error;
pub mod search;

pub use config::ApiConfig;
pub use error::SearchError;
pub use search::{PhotoSource, SearchOutcome, SearchSession, SearchStatus, SearchTicket};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchParams {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            per_page: None,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Encodes the params as an `application/x-www-form-urlencoded` query string.
    pub fn to_query_string(&self) -> Result<String, SearchError> {
        serde_urlencoded::to_string(self).map_err(|err| SearchError::Encode(err.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u64,
    pub results: Vec<Photo>,
}

impl SearchResponse {
    pub fn from_json(text: &str) -> Result<Self, SearchError> {
        serde_json::from_str(text).map_err(|err| SearchError::Decode(err.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Photo {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Photo {
    pub fn display_url(&self) -> &str {
        &self.urls.regular
    }

    /// Accessible text for the image; empty when the API gives none.
    pub fn alt_text(&self) -> &str {
        self.description
            .as_deref()
            .or(self.alt_description.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PhotoUrls {
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub full: String,
    pub regular: String,
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub thumb: String,
}
