//! REST data source speaking the backend's PostgREST dialect.
//!
//! Landmarks are fetched with their category embedded
//! (`select=*,category:categories(*)`), already filtered to active
//! records and ordered by name; categories come ordered by sort order.
//! The server enforces its own ordering, but the store re-sorts on
//! replacement anyway, so a backend that ignores the `order` parameter
//! does not break determinism.

use tracing::debug;

use crate::store::{Category, Landmark};

use super::http::HttpClient;
use super::{DataSourceError, LandmarkSource};

/// Query string for the landmark collection.
const LANDMARKS_QUERY: &str = "select=*,category:categories(*)&is_active=eq.true&order=name.asc";

/// Query string for the category collection.
const CATEGORIES_QUERY: &str = "select=*&order=sort_order.asc";

/// Landmark source backed by a PostgREST-style HTTP API.
pub struct RestLandmarkSource<C: HttpClient> {
    base_url: String,
    api_key: String,
    client: C,
}

impl<C: HttpClient> RestLandmarkSource<C> {
    /// Create a source for the given backend.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Backend root, e.g. `https://xyz.example.co` (no
    ///   trailing slash required)
    /// * `api_key` - API key sent as the `apikey` header
    /// * `client` - HTTP client implementation
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, client: C) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            api_key: api_key.into(),
            client,
        }
    }

    fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<Vec<T>, DataSourceError> {
        let url = format!("{}/rest/v1/{}?{}", self.base_url, path, query);
        debug!(%url, "fetching from data source");

        let headers = [
            ("apikey", self.api_key.as_str()),
            ("Accept", "application/json"),
        ];

        let body = self.client.get(&url, &headers)?;
        serde_json::from_slice(&body)
            .map_err(|e| DataSourceError::Decode(format!("{} payload: {}", path, e)))
    }
}

impl<C: HttpClient> LandmarkSource for RestLandmarkSource<C> {
    fn fetch_landmarks(&self) -> Result<Vec<Landmark>, DataSourceError> {
        self.fetch("landmarks", LANDMARKS_QUERY)
    }

    fn fetch_categories(&self) -> Result<Vec<Category>, DataSourceError> {
        self.fetch("categories", CATEGORIES_QUERY)
    }
}
