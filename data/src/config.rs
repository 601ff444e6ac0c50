use crate::{SearchError, SearchParams};

pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";
pub const DEFAULT_PER_PAGE: u32 = 30;
/// Largest page size the search endpoint accepts.
pub const MAX_PER_PAGE: u32 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub access_key: Option<String>,
    pub per_page: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            access_key: None,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ApiConfig {
    /// Reads `UNSPLASH_API_URL`, `UNSPLASH_ACCESS_KEY` and `UNSPLASH_PER_PAGE`
    /// as they were set when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("UNSPLASH_API_URL"),
            option_env!("UNSPLASH_ACCESS_KEY"),
            option_env!("UNSPLASH_PER_PAGE"),
        )
    }

    pub fn from_values(
        base_url: Option<&str>,
        access_key: Option<&str>,
        per_page: Option<&str>,
    ) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let access_key = access_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string);
        let per_page = match per_page.map(|value| value.trim().parse::<u32>()) {
            Some(Ok(value)) => value.clamp(1, MAX_PER_PAGE),
            Some(Err(err)) => {
                log::warn!("Ignoring UNSPLASH_PER_PAGE: {err}");
                DEFAULT_PER_PAGE
            }
            None => DEFAULT_PER_PAGE,
        };
        Self {
            base_url,
            access_key,
            per_page,
        }
    }

    pub fn search_url(&self, params: &SearchParams) -> Result<String, SearchError> {
        Ok(format!(
            "{}/search/photos?{}",
            self.base_url,
            params.to_query_string()?
        ))
    }

    pub fn authorization_header(&self) -> Result<String, SearchError> {
        self.access_key
            .as_deref()
            .map(|key| format!("Client-ID {key}"))
            .ok_or(SearchError::MissingAccessKey)
    }
}
