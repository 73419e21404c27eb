//! Shared types for geocoding requests and responses
//!
//! The address-component and location-type enumerations are open-ended on the
//! wire: Google documents a fixed set of tokens but reserves the right to add
//! more. Unknown tokens therefore decode to a catch-all `Other` variant
//! instead of failing, while encoding the catch-all back produces an empty
//! token. The response `Status` enumeration is closed and an unknown status
//! string fails the decode.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    /// Wire form: `"{lat},{lng}"` with `.` as the decimal point
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A bounding rectangle given as its south-west and north-east corners
///
/// No validation that `southwest` actually lies south-west of `northeast`;
/// the service interprets whatever the caller supplies.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl Viewport {
    pub fn new(southwest: LatLng, northeast: LatLng) -> Self {
        Self {
            southwest,
            northeast,
        }
    }
}

impl fmt::Display for Viewport {
    /// Wire form: `"{swLat},{swLng}|{neLat},{neLng}"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.southwest, self.northeast)
    }
}

/// Address-component categories documented by the Geocoding API
///
/// Used both in component filters on forward requests and in the `types`
/// arrays of decoded results. `Other` absorbs any token not in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    StreetAddress,
    Route,
    Intersection,
    Political,
    Country,
    AdministrativeArea,
    AdministrativeAreaLevel1,
    AdministrativeAreaLevel2,
    AdministrativeAreaLevel3,
    AdministrativeAreaLevel4,
    AdministrativeAreaLevel5,
    ColloquialArea,
    Locality,
    Ward,
    Sublocality,
    SublocalityLevel1,
    SublocalityLevel2,
    SublocalityLevel3,
    SublocalityLevel4,
    SublocalityLevel5,
    Neighborhood,
    Premise,
    Subpremise,
    PostalCode,
    NaturalFeature,
    Airport,
    Park,
    PointOfInterest,
    Floor,
    Establishment,
    Parking,
    PostBox,
    PostalTown,
    Room,
    StreetNumber,
    BusStation,
    TrainStation,
    TransitStation,
    /// Catch-all for tokens not in the documented set
    Other,
}

/// Wire token table for [`ComponentKind`], used in both directions
const COMPONENT_KIND_TOKENS: &[(&str, ComponentKind)] = &[
    ("street_address", ComponentKind::StreetAddress),
    ("route", ComponentKind::Route),
    ("intersection", ComponentKind::Intersection),
    ("political", ComponentKind::Political),
    ("country", ComponentKind::Country),
    ("administrative_area", ComponentKind::AdministrativeArea),
    (
        "administrative_area_level_1",
        ComponentKind::AdministrativeAreaLevel1,
    ),
    (
        "administrative_area_level_2",
        ComponentKind::AdministrativeAreaLevel2,
    ),
    (
        "administrative_area_level_3",
        ComponentKind::AdministrativeAreaLevel3,
    ),
    (
        "administrative_area_level_4",
        ComponentKind::AdministrativeAreaLevel4,
    ),
    (
        "administrative_area_level_5",
        ComponentKind::AdministrativeAreaLevel5,
    ),
    ("colloquial_area", ComponentKind::ColloquialArea),
    ("locality", ComponentKind::Locality),
    ("ward", ComponentKind::Ward),
    ("sublocality", ComponentKind::Sublocality),
    ("sublocality_level_1", ComponentKind::SublocalityLevel1),
    ("sublocality_level_2", ComponentKind::SublocalityLevel2),
    ("sublocality_level_3", ComponentKind::SublocalityLevel3),
    ("sublocality_level_4", ComponentKind::SublocalityLevel4),
    ("sublocality_level_5", ComponentKind::SublocalityLevel5),
    ("neighborhood", ComponentKind::Neighborhood),
    ("premise", ComponentKind::Premise),
    ("subpremise", ComponentKind::Subpremise),
    ("postal_code", ComponentKind::PostalCode),
    ("natural_feature", ComponentKind::NaturalFeature),
    ("airport", ComponentKind::Airport),
    ("park", ComponentKind::Park),
    ("point_of_interest", ComponentKind::PointOfInterest),
    ("floor", ComponentKind::Floor),
    ("establishment", ComponentKind::Establishment),
    ("parking", ComponentKind::Parking),
    ("post_box", ComponentKind::PostBox),
    ("postal_town", ComponentKind::PostalTown),
    ("room", ComponentKind::Room),
    ("street_number", ComponentKind::StreetNumber),
    ("bus_station", ComponentKind::BusStation),
    ("train_station", ComponentKind::TrainStation),
    ("transit_station", ComponentKind::TransitStation),
];

impl ComponentKind {
    /// Look up a wire token; unknown tokens map to [`ComponentKind::Other`]
    pub fn from_token(token: &str) -> Self {
        COMPONENT_KIND_TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Other)
    }

    /// Wire token for this kind; empty for [`ComponentKind::Other`], which
    /// has no outbound representation
    pub fn token(&self) -> &'static str {
        COMPONENT_KIND_TOKENS
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(token, _)| *token)
            .unwrap_or("")
    }
}

impl<'de> Deserialize<'de> for ComponentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token))
    }
}

/// Precision of a geocoded location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationType {
    /// Precise street-address result
    Rooftop,
    /// Interpolated between two precise points, e.g. along a road
    RangeInterpolated,
    /// Geometric center of a polyline or polygon result
    GeometricCenter,
    Approximate,
    /// Catch-all for tokens not in the documented set
    Other,
}

const LOCATION_TYPE_TOKENS: &[(&str, LocationType)] = &[
    ("ROOFTOP", LocationType::Rooftop),
    ("RANGE_INTERPOLATED", LocationType::RangeInterpolated),
    ("GEOMETRIC_CENTER", LocationType::GeometricCenter),
    ("APPROXIMATE", LocationType::Approximate),
];

impl LocationType {
    /// Look up a wire token; unknown tokens map to [`LocationType::Other`]
    pub fn from_token(token: &str) -> Self {
        LOCATION_TYPE_TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, ty)| *ty)
            .unwrap_or(Self::Other)
    }

    /// Wire token for this type; empty for [`LocationType::Other`]
    pub fn token(&self) -> &'static str {
        LOCATION_TYPE_TOKENS
            .iter()
            .find(|(_, ty)| ty == self)
            .map(|(token, _)| *token)
            .unwrap_or("")
    }
}

impl<'de> Deserialize<'de> for LocationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token))
    }
}

/// Top-level response status
///
/// Unlike [`ComponentKind`] and [`LocationType`], this enumeration is closed:
/// a status string outside this set fails the whole response decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_kind_token_lookup() {
        assert_eq!(ComponentKind::from_token("country"), ComponentKind::Country);
        assert_eq!(
            ComponentKind::from_token("administrative_area"),
            ComponentKind::AdministrativeArea
        );
        assert_eq!(
            ComponentKind::from_token("sublocality_level_3"),
            ComponentKind::SublocalityLevel3
        );
        assert_eq!(ComponentKind::Country.token(), "country");
        assert_eq!(ComponentKind::StreetNumber.token(), "street_number");
    }

    #[test]
    fn test_component_kind_unknown_token_degrades() {
        assert_eq!(
            ComponentKind::from_token("plus_code_area"),
            ComponentKind::Other
        );
        assert_eq!(ComponentKind::from_token(""), ComponentKind::Other);
    }

    #[test]
    fn test_other_component_has_no_outbound_token() {
        assert_eq!(ComponentKind::Other.token(), "");
    }

    #[test]
    fn test_component_kind_deserialize_never_fails() {
        let kind: ComponentKind = serde_json::from_str("\"locality\"").unwrap();
        assert_eq!(kind, ComponentKind::Locality);
        let kind: ComponentKind = serde_json::from_str("\"brand_new_token\"").unwrap();
        assert_eq!(kind, ComponentKind::Other);
    }

    #[test]
    fn test_location_type_token_lookup() {
        assert_eq!(LocationType::from_token("ROOFTOP"), LocationType::Rooftop);
        assert_eq!(
            LocationType::from_token("RANGE_INTERPOLATED"),
            LocationType::RangeInterpolated
        );
        assert_eq!(LocationType::GeometricCenter.token(), "GEOMETRIC_CENTER");
    }

    #[test]
    fn test_location_type_unknown_token_degrades() {
        assert_eq!(LocationType::from_token("MIDPOINT"), LocationType::Other);
        assert_eq!(LocationType::Other.token(), "");
    }

    #[test]
    fn test_status_decodes_known_tokens() {
        let status: Status = serde_json::from_str("\"OK\"").unwrap();
        assert!(status.is_ok());
        let status: Status = serde_json::from_str("\"ZERO_RESULTS\"").unwrap();
        assert_eq!(status, Status::ZeroResults);
        let status: Status = serde_json::from_str("\"OVER_QUERY_LIMIT\"").unwrap();
        assert_eq!(status, Status::OverQueryLimit);
    }

    #[test]
    fn test_status_rejects_unknown_token() {
        assert!(serde_json::from_str::<Status>("\"BOGUS\"").is_err());
    }

    #[test]
    fn test_latlng_display() {
        let coords = LatLng::new(37.8489277, -122.4031502);
        assert_eq!(coords.to_string(), "37.8489277,-122.4031502");
    }

    #[test]
    fn test_viewport_display() {
        let viewport = Viewport::new(LatLng::new(34.17, -118.6), LatLng::new(34.23, -118.5));
        assert_eq!(viewport.to_string(), "34.17,-118.6|34.23,-118.5");
    }
}
