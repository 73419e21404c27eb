//! HTTP client for the Geocoding API

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{GeocodingError, Result};
use crate::request::{ForwardRequest, ReverseRequest, GEOCODE_ENDPOINT};
use crate::response::GeocodingResponse;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Google Geocoding API
///
/// Issues the URLs produced by [`ForwardRequest`] and [`ReverseRequest`] and
/// decodes the response body. Adds no retry, caching, or rate-limit policy of
/// its own.
pub struct GeocodingClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodingClient {
    /// Create a client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_base_url_and_timeout(GEOCODE_ENDPOINT, timeout)
    }

    /// Create a client against a non-default endpoint, e.g. a test server
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_base_url_and_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom endpoint and timeout
    pub fn with_base_url_and_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Forward geocode: resolve an address or component filter to coordinates
    pub async fn geocode(&self, request: &ForwardRequest) -> Result<GeocodingResponse> {
        let response = self.fetch(&request.url_with_base(&self.base_url)).await?;
        debug!(
            status = ?response.status,
            results = response.results.len(),
            "forward geocode complete"
        );
        Ok(response)
    }

    /// Reverse geocode: resolve coordinates or a place id to addresses
    pub async fn reverse_geocode(&self, request: &ReverseRequest) -> Result<GeocodingResponse> {
        let response = self.fetch(&request.url_with_base(&self.base_url)).await?;
        debug!(
            status = ?response.status,
            results = response.results.len(),
            "reverse geocode complete"
        );
        Ok(response)
    }

    async fn fetch(&self, url: &str) -> Result<GeocodingResponse> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "geocoding request rejected");
            return Err(GeocodingError::Api(format!(
                "geocoding service returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        GeocodingResponse::from_json(&body)
    }
}

impl Default for GeocodingClient {
    fn default() -> Self {
        Self::new()
    }
}
