//! Rust client for the [Google Geocoding API](https://developers.google.com/maps/documentation/geocoding)
//!
//! This crate builds correctly-encoded query URLs for forward (address →
//! coordinates) and reverse (coordinates or place id → address) geocoding,
//! issues them over HTTP, and decodes the JSON response into a typed model.
//!
//! Requests are immutable values refined through builder calls; every
//! refinement returns a new request and leaves the old one untouched.
//! Responses tolerate tokens the service adds after the documented
//! enumerations by decoding them to catch-all variants, while an
//! unrecognized top-level status still fails the decode outright.
//!
//! # Example
//!
//! ```no_run
//! use google_geocoding_client::{ComponentKind, ForwardRequest, GeocodingClient};
//!
//! # async fn example() -> Result<(), google_geocoding_client::GeocodingError> {
//! let client = GeocodingClient::new();
//!
//! // Forward geocode an address, restricted to Spain
//! let request = ForwardRequest::address("YOUR_API_KEY", "Toledo")
//!     .with_component("Spain", ComponentKind::Country)
//!     .with_language("es");
//! let response = client.geocode(&request).await?;
//! for result in response.results {
//!     println!("{} -> {}", result.formatted_address, result.geometry.location);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod request;
mod response;
mod types;

pub use client::GeocodingClient;
pub use error::{GeocodingError, Result};
pub use request::{
    ForwardRequest, ForwardSubject, ReverseRequest, ReverseSubject, GEOCODE_ENDPOINT,
};
pub use response::{AddressComponent, GeocodingResponse, GeocodingResult, Geometry};
pub use types::{ComponentKind, LatLng, LocationType, Status, Viewport};
