//! Async client for the analytics backend.
//!
//! Works unchanged on `wasm32-unknown-unknown` (reqwest uses `fetch` there)
//! and natively on tokio. Each call is a single GET with no retry.

use crate::endpoints::{self, Endpoint};
use crate::error::FetchError;
use crate::models::{
    AnalyticsSnapshot, Organization, PredictionHorizon, PredictionSnapshot, RecentAnalytics,
    Store,
};
use crate::parse;
use log::{debug, warn};
use reqwest::Url;

/// HTTP client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    /// Client for `base_url` (e.g. `http://localhost:8080`) with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Client for `base_url` using a preconfigured `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint. Every path segment is percent-encoded,
    /// so ids containing `/`, `?` or `#` stay inside their own segment.
    pub fn url(&self, endpoint: &Endpoint) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::Network(format!("invalid base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Network(format!("base URL {} cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(&endpoint.segments);
        if !endpoint.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&endpoint.query);
        }
        Ok(url)
    }

    async fn get_text(&self, endpoint: &Endpoint) -> Result<String, FetchError> {
        let url = self.url(endpoint)?;
        debug!("GET {}", url);

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read body: {}", e)))?;

        if !status.is_success() {
            warn!("Bad response status from {}: {}", url, status);
            return Err(FetchError::Rejected {
                status: status.as_u16(),
                message: parse::server_message(&body),
            });
        }
        Ok(body)
    }

    pub async fn organizations(&self) -> Result<Vec<Organization>, FetchError> {
        let body = self.get_text(&endpoints::organizations_dropdown()).await?;
        parse::named_list(&body, parse::ORGANIZATIONS_NOT_ARRAY)
    }

    pub async fn stores(&self, organization_id: &str) -> Result<Vec<Store>, FetchError> {
        let body = self
            .get_text(&endpoints::stores_dropdown(organization_id))
            .await?;
        parse::named_list(&body, parse::STORES_NOT_ARRAY)
    }

    /// Analytics snapshot for a store; `None` when the backend returned no body.
    pub async fn store_analytics(
        &self,
        store_id: &str,
    ) -> Result<Option<AnalyticsSnapshot>, FetchError> {
        let body = self.get_text(&endpoints::store_analytics(store_id)).await?;
        parse::analytics(&body)
    }

    pub async fn ctr_prediction(
        &self,
        store_id: &str,
        horizon: PredictionHorizon,
    ) -> Result<PredictionSnapshot, FetchError> {
        let body = self
            .get_text(&endpoints::ctr_prediction(store_id, horizon))
            .await?;
        parse::prediction(&body)
    }

    pub async fn recent_analytics(
        &self,
        store_id: &str,
        days: u32,
    ) -> Result<RecentAnalytics, FetchError> {
        let body = self
            .get_text(&endpoints::recent_analytics(store_id, days))
            .await?;
        parse::recent(&body)
    }
}
