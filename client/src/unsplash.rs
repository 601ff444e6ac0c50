use data::{ApiConfig, PhotoSource, SearchError, SearchParams, SearchResponse};
use gloo_net::http::Request;
use log::debug;

/// Talks to the `/search/photos` endpoint of the Unsplash API.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    config: ApiConfig,
}

impl UnsplashClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl PhotoSource for UnsplashClient {
    async fn search_photos(&self, params: &SearchParams) -> Result<SearchResponse, SearchError> {
        let authorization = self.config.authorization_header()?;
        let url = self.config.search_url(params)?;
        debug!("GET {url}");

        let response = Request::get(&url)
            .header("Authorization", &authorization)
            .header("Accept-Version", "v1")
            .send()
            .await
            .map_err(|err| SearchError::Network(err.to_string()))?;
        let text = response
            .text()
            .await
            .map_err(|err| SearchError::Network(err.to_string()))?;

        if !response.ok() {
            return Err(SearchError::from_status(response.status(), &text));
        }
        let parsed = SearchResponse::from_json(&text)?;
        debug!(
            "{} of {} photos for {:?}",
            parsed.results.len(),
            parsed.total,
            params.query
        );
        Ok(parsed)
    }
}
