//! Decoded response model for the Geocoding API
//!
//! These structs mirror the service's JSON shape. Missing required fields and
//! unrecognized `status` tokens fail the whole decode; unrecognized
//! component-kind and location-type tokens degrade to their catch-all
//! variants instead (see [`crate::types`]).

use serde::Deserialize;

use crate::error::{GeocodingError, Result};
use crate::types::{ComponentKind, LatLng, LocationType, Status, Viewport};

/// Top-level geocoding response
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    pub status: Status,
    pub results: Vec<GeocodingResult>,
    /// Human-readable explanation the service attaches to some non-OK statuses
    pub error_message: Option<String>,
}

impl GeocodingResponse {
    /// Decode a raw JSON body into the typed response
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(GeocodingError::Decode)
    }
}

/// A single geocoded match
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub address_components: Vec<AddressComponent>,
    pub formatted_address: String,
    pub geometry: Geometry,
    pub types: Vec<ComponentKind>,
    pub place_id: String,
    /// Set when the service matched only part of the requested address
    pub partial_match: Option<bool>,
}

/// One component of a decoded address
///
/// Either name may be absent independently of the other.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub types: Vec<ComponentKind>,
}

/// Location data for a result
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    pub location_type: LocationType,
    pub viewport: Viewport,
    /// Precise bounding box, present only for results with an extent
    pub bounds: Option<Viewport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{
        "status": "OK",
        "results": [
            {
                "address_components": [
                    {
                        "long_name": "1600",
                        "short_name": "1600",
                        "types": ["street_number"]
                    },
                    {
                        "long_name": "Amphitheatre Parkway",
                        "short_name": "Amphitheatre Pkwy",
                        "types": ["route"]
                    },
                    {
                        "long_name": "United States",
                        "short_name": "US",
                        "types": ["country", "political"]
                    }
                ],
                "formatted_address": "1600 Amphitheatre Parkway, Mountain View, CA 94043, USA",
                "geometry": {
                    "location": { "lat": 37.4224764, "lng": -122.0842499 },
                    "location_type": "ROOFTOP",
                    "viewport": {
                        "northeast": { "lat": 37.4238253, "lng": -122.0829009 },
                        "southwest": { "lat": 37.4211274, "lng": -122.0855989 }
                    }
                },
                "place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA",
                "types": ["street_address"]
            }
        ]
    }"#;

    #[test]
    fn test_decode_ok_response() {
        let response = GeocodingResponse::from_json(OK_BODY).unwrap();
        assert!(response.status.is_ok());
        assert_eq!(response.results.len(), 1);

        let result = &response.results[0];
        assert_eq!(
            result.formatted_address,
            "1600 Amphitheatre Parkway, Mountain View, CA 94043, USA"
        );
        assert_eq!(result.place_id, "ChIJ2eUgeAK6j4ARbn5u_wAGqWA");
        assert_eq!(result.types, vec![ComponentKind::StreetAddress]);
        assert_eq!(result.partial_match, None);

        assert_eq!(result.address_components.len(), 3);
        let country = &result.address_components[2];
        assert_eq!(country.long_name.as_deref(), Some("United States"));
        assert_eq!(country.short_name.as_deref(), Some("US"));
        assert_eq!(
            country.types,
            vec![ComponentKind::Country, ComponentKind::Political]
        );

        let geometry = &result.geometry;
        assert_eq!(geometry.location, LatLng::new(37.4224764, -122.0842499));
        assert_eq!(geometry.location_type, LocationType::Rooftop);
        assert_eq!(
            geometry.viewport.southwest,
            LatLng::new(37.4211274, -122.0855989)
        );
        assert!(geometry.bounds.is_none());
    }

    #[test]
    fn test_decode_zero_results() {
        let response =
            GeocodingResponse::from_json(r#"{ "status": "ZERO_RESULTS", "results": [] }"#).unwrap();
        assert_eq!(response.status, Status::ZeroResults);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_decode_error_message() {
        let body = r#"{
            "status": "REQUEST_DENIED",
            "results": [],
            "error_message": "The provided API key is invalid."
        }"#;
        let response = GeocodingResponse::from_json(body).unwrap();
        assert_eq!(response.status, Status::RequestDenied);
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn test_decode_unknown_status_fails() {
        let err = GeocodingResponse::from_json(r#"{ "status": "BOGUS", "results": [] }"#)
            .unwrap_err();
        assert!(matches!(err, GeocodingError::Decode(_)));
    }

    #[test]
    fn test_decode_unknown_type_token_degrades() {
        let body = OK_BODY.replace(
            r#""types": ["street_address"]"#,
            r#""types": ["street_address", "some_future_type"]"#,
        );
        let response = GeocodingResponse::from_json(&body).unwrap();
        assert_eq!(
            response.results[0].types,
            vec![ComponentKind::StreetAddress, ComponentKind::Other]
        );
    }

    #[test]
    fn test_decode_unknown_location_type_degrades() {
        let body = OK_BODY.replace("\"ROOFTOP\"", "\"MIDPOINT\"");
        let response = GeocodingResponse::from_json(&body).unwrap();
        assert_eq!(
            response.results[0].geometry.location_type,
            LocationType::Other
        );
    }

    #[test]
    fn test_decode_missing_place_id_fails() {
        let body = OK_BODY.replace(
            r#""place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA","#,
            "",
        );
        assert!(GeocodingResponse::from_json(&body).is_err());
    }

    #[test]
    fn test_decode_non_numeric_lat_fails() {
        let body = OK_BODY.replace(
            r#""location": { "lat": 37.4224764, "lng": -122.0842499 }"#,
            r#""location": { "lat": "37.4224764", "lng": -122.0842499 }"#,
        );
        assert!(GeocodingResponse::from_json(&body).is_err());
    }

    #[test]
    fn test_decode_absent_names_are_none() {
        let body = r#"{
            "status": "OK",
            "results": [
                {
                    "address_components": [
                        { "types": ["postal_code"] }
                    ],
                    "formatted_address": "94043, USA",
                    "geometry": {
                        "location": { "lat": 37.42, "lng": -122.08 },
                        "location_type": "APPROXIMATE",
                        "viewport": {
                            "northeast": { "lat": 37.44, "lng": -122.05 },
                            "southwest": { "lat": 37.40, "lng": -122.11 }
                        }
                    },
                    "place_id": "ChIJiQHsW0m3j4ARm69rRkrUF3w",
                    "types": ["postal_code"]
                }
            ]
        }"#;
        let response = GeocodingResponse::from_json(body).unwrap();
        let component = &response.results[0].address_components[0];
        assert!(component.long_name.is_none());
        assert!(component.short_name.is_none());
        assert_eq!(component.types, vec![ComponentKind::PostalCode]);
    }

    #[test]
    fn test_decode_missing_component_types_fails() {
        let body = OK_BODY.replace(
            r#"{
                        "long_name": "1600",
                        "short_name": "1600",
                        "types": ["street_number"]
                    }"#,
            r#"{ "long_name": "1600", "short_name": "1600" }"#,
        );
        assert!(GeocodingResponse::from_json(&body).is_err());
    }

    #[test]
    fn test_decode_partial_match() {
        let body = OK_BODY.replace(
            r#""place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA","#,
            r#""place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA", "partial_match": true,"#,
        );
        let response = GeocodingResponse::from_json(&body).unwrap();
        assert_eq!(response.results[0].partial_match, Some(true));
    }
}
