//! HTTP API Client
//!
//! gloo-net implementation of the suggestion and analytics sources.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use playboard::api::{analytics_url, suggestions_url};
use playboard::{
    AnalyticsSource, DashboardSeries, FetchError, GameId, SuggestionItem, SuggestionSource,
};

/// Client for the dashboard's JSON endpoints
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    /// `base_url` may be empty for same-origin requests
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

async fn get_json<T: DeserializeOwned>(url: String) -> Result<T, FetchError> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            url,
        });
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl SuggestionSource for HttpBackend {
    async fn suggest(&self, query: &str) -> Result<Vec<SuggestionItem>, FetchError> {
        get_json(suggestions_url(&self.base_url, query)).await
    }
}

#[async_trait(?Send)]
impl AnalyticsSource for HttpBackend {
    async fn analytics(&self, game_id: &GameId) -> Result<DashboardSeries, FetchError> {
        get_json(analytics_url(&self.base_url, game_id.as_str())).await
    }
}
