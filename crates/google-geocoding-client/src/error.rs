//! Error types for the geocoding client

use std::fmt;

/// Errors that can occur when geocoding
#[derive(Debug)]
pub enum GeocodingError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// The service answered with a non-success HTTP status
    Api(String),
    /// Failed to decode the JSON response body
    Decode(serde_json::Error),
}

impl fmt::Display for GeocodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "geocoding HTTP error: {e}"),
            Self::Api(msg) => write!(f, "geocoding API error: {msg}"),
            Self::Decode(e) => write!(f, "geocoding decode error: {e}"),
        }
    }
}

impl std::error::Error for GeocodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Api(_) => None,
            Self::Decode(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for GeocodingError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for GeocodingError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

/// Result type for geocoding operations
pub type Result<T> = std::result::Result<T, GeocodingError>;
