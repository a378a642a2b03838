//! Supplementary weather lookup.
//!
//! The AR overlay shows current conditions next to the landmark count.
//! This is a thin client for an OpenWeatherMap-compatible endpoint with a
//! short time-based cache: conditions change slowly, so a lookup per
//! coordinate is reused for ten minutes before the backend is asked
//! again. Not part of the placement pipeline.

mod model;

pub use model::{Weather, WeatherError};

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::source::HttpClient;

use model::WeatherResponse;

/// Default current-weather endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// How long a cached lookup stays valid.
const CACHE_VALIDITY: Duration = Duration::from_secs(600);

/// Weather lookup with a per-coordinate TTL cache.
pub struct WeatherService<C: HttpClient> {
    api_key: String,
    base_url: String,
    client: C,
    cache: Mutex<HashMap<String, (Weather, Instant)>>,
    cache_validity: Duration,
}

impl<C: HttpClient> WeatherService<C> {
    /// Create a service against the default endpoint.
    pub fn new(api_key: impl Into<String>, client: C) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, client)
    }

    /// Create a service against a custom endpoint (used in tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        client: C,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client,
            cache: Mutex::new(HashMap::new()),
            cache_validity: CACHE_VALIDITY,
        }
    }

    /// Override the cache validity window (used in tests).
    pub fn with_cache_validity(mut self, validity: Duration) -> Self {
        self.cache_validity = validity;
        self
    }

    /// Fetch current conditions for a coordinate.
    ///
    /// Serves from cache when a lookup for the same coordinate is younger
    /// than the validity window.
    pub fn fetch(&self, latitude: f64, longitude: f64) -> Result<Weather, WeatherError> {
        if self.api_key.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let cache_key = format!("{},{}", latitude, longitude);

        if let Some((weather, fetched_at)) = self.cache.lock().get(&cache_key) {
            if fetched_at.elapsed() < self.cache_validity {
                debug!(%cache_key, "serving weather from cache");
                return Ok(weather.clone());
            }
        }

        let url = format!(
            "{}?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        );

        let body = self
            .client
            .get(&url, &[("Accept", "application/json")])
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let response: WeatherResponse = serde_json::from_slice(&body)
            .map_err(|e| WeatherError::Decode(e.to_string()))?;

        let weather = Weather::from(response);
        self.cache
            .lock()
            .insert(cache_key, (weather.clone(), Instant::now()));

        Ok(weather)
    }
}
