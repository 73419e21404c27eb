//! Request models and URL encoding for the Geocoding API
//!
//! Requests are immutable values: every `with_*` refinement returns a new
//! request and leaves the receiver untouched, so a request handed to the
//! client can never be observably changed by later builder calls.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::types::{ComponentKind, LatLng, LocationType, Viewport};

/// Fixed endpoint for the Geocoding API
pub const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// The mandatory part of a forward request: an address, a component filter
/// map, or both
///
/// The component map is keyed by filter value, so merging the same value
/// twice overwrites its kind rather than appending.
#[derive(Debug, Clone, PartialEq)]
pub enum ForwardSubject {
    Address(String),
    Components(BTreeMap<String, ComponentKind>),
    AddressAndComponents(String, BTreeMap<String, ComponentKind>),
}

/// A forward (address → coordinates) geocoding request
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardRequest {
    pub subject: ForwardSubject,
    pub bounds: Option<Viewport>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub api_key: String,
}

impl ForwardRequest {
    /// Create a request for a free-form address
    pub fn address(api_key: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            subject: ForwardSubject::Address(address.into()),
            bounds: None,
            language: None,
            region: None,
            api_key: api_key.into(),
        }
    }

    /// Create a request from component filters alone
    ///
    /// Later entries with the same value string overwrite earlier ones.
    pub fn components<I, S>(api_key: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = (S, ComponentKind)>,
        S: Into<String>,
    {
        let map = components
            .into_iter()
            .map(|(value, kind)| (value.into(), kind))
            .collect();
        Self {
            subject: ForwardSubject::Components(map),
            bounds: None,
            language: None,
            region: None,
            api_key: api_key.into(),
        }
    }

    /// Replace the address text, preserving any component filters
    ///
    /// A components-only request is promoted to address-and-components.
    pub fn with_address(&self, address: impl Into<String>) -> Self {
        let address = address.into();
        let subject = match &self.subject {
            ForwardSubject::Address(_) => ForwardSubject::Address(address),
            ForwardSubject::Components(map) => {
                ForwardSubject::AddressAndComponents(address, map.clone())
            }
            ForwardSubject::AddressAndComponents(_, map) => {
                ForwardSubject::AddressAndComponents(address, map.clone())
            }
        };
        Self {
            subject,
            ..self.clone()
        }
    }

    /// Merge one component filter, keyed by its value string (last write wins)
    ///
    /// An address-only request is promoted to address-and-components.
    pub fn with_component(&self, value: impl Into<String>, kind: ComponentKind) -> Self {
        let value = value.into();
        let subject = match &self.subject {
            ForwardSubject::Address(address) => {
                let mut map = BTreeMap::new();
                map.insert(value, kind);
                ForwardSubject::AddressAndComponents(address.clone(), map)
            }
            ForwardSubject::Components(map) => {
                let mut map = map.clone();
                map.insert(value, kind);
                ForwardSubject::Components(map)
            }
            ForwardSubject::AddressAndComponents(address, map) => {
                let mut map = map.clone();
                map.insert(value, kind);
                ForwardSubject::AddressAndComponents(address.clone(), map)
            }
        };
        Self {
            subject,
            ..self.clone()
        }
    }

    /// Bias results toward a bounding box (last call wins)
    pub fn with_bounds(&self, bounds: Viewport) -> Self {
        Self {
            bounds: Some(bounds),
            ..self.clone()
        }
    }

    /// Set the response language (last call wins, format unvalidated)
    pub fn with_language(&self, language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..self.clone()
        }
    }

    /// Set the region bias as a ccTLD code (last call wins, unvalidated)
    pub fn with_region(&self, region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..self.clone()
        }
    }

    /// Encode this request as a fully-formed request URL
    pub fn url(&self) -> String {
        self.url_with_base(GEOCODE_ENDPOINT)
    }

    /// Encode against a non-default endpoint, e.g. a test server
    pub fn url_with_base(&self, base: &str) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("key", &self.api_key);
        match &self.subject {
            ForwardSubject::Address(address) => {
                append_address(&mut query, address);
            }
            ForwardSubject::Components(map) => {
                append_components(&mut query, map);
            }
            ForwardSubject::AddressAndComponents(address, map) => {
                append_address(&mut query, address);
                append_components(&mut query, map);
            }
        }
        if let Some(bounds) = &self.bounds {
            query.append_pair("bounds", &bounds.to_string());
        }
        if let Some(language) = &self.language {
            query.append_pair("language", language);
        }
        if let Some(region) = &self.region {
            query.append_pair("region", region);
        }
        format!("{}?{}", base, query.finish())
    }
}

/// The mandatory part of a reverse request, fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub enum ReverseSubject {
    LatLng(LatLng),
    PlaceId(String),
}

/// A reverse (coordinates/place-id → address) geocoding request
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseRequest {
    pub subject: ReverseSubject,
    pub language: Option<String>,
    pub result_types: Option<Vec<ComponentKind>>,
    pub location_types: Option<Vec<LocationType>>,
    pub api_key: String,
}

impl ReverseRequest {
    /// Create a request for a coordinate pair
    pub fn latlng(api_key: impl Into<String>, coordinates: LatLng) -> Self {
        Self {
            subject: ReverseSubject::LatLng(coordinates),
            language: None,
            result_types: None,
            location_types: None,
            api_key: api_key.into(),
        }
    }

    /// Create a request for a place identifier
    pub fn place_id(api_key: impl Into<String>, place_id: impl Into<String>) -> Self {
        Self {
            subject: ReverseSubject::PlaceId(place_id.into()),
            language: None,
            result_types: None,
            location_types: None,
            api_key: api_key.into(),
        }
    }

    /// Set the response language (last call wins, format unvalidated)
    pub fn with_language(&self, language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..self.clone()
        }
    }

    /// Restrict results to the given address types
    ///
    /// Replaces any previously supplied list wholesale; emitted in the
    /// caller-supplied order.
    pub fn with_result_types(&self, result_types: Vec<ComponentKind>) -> Self {
        Self {
            result_types: Some(result_types),
            ..self.clone()
        }
    }

    /// Restrict results to the given location precisions
    ///
    /// Replaces any previously supplied list wholesale.
    pub fn with_location_types(&self, location_types: Vec<LocationType>) -> Self {
        Self {
            location_types: Some(location_types),
            ..self.clone()
        }
    }

    /// Encode this request as a fully-formed request URL
    pub fn url(&self) -> String {
        self.url_with_base(GEOCODE_ENDPOINT)
    }

    /// Encode against a non-default endpoint, e.g. a test server
    pub fn url_with_base(&self, base: &str) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("key", &self.api_key);
        match &self.subject {
            ReverseSubject::LatLng(coordinates) => {
                query.append_pair("latlng", &coordinates.to_string());
            }
            ReverseSubject::PlaceId(place_id) => {
                query.append_pair("place_id", place_id);
            }
        }
        if let Some(language) = &self.language {
            query.append_pair("language", language);
        }
        if let Some(result_types) = &self.result_types {
            if !result_types.is_empty() {
                let joined = result_types
                    .iter()
                    .map(|kind| kind.token())
                    .collect::<Vec<_>>()
                    .join("|");
                query.append_pair("result_type", &joined);
            }
        }
        if let Some(location_types) = &self.location_types {
            if !location_types.is_empty() {
                let joined = location_types
                    .iter()
                    .map(|ty| ty.token())
                    .collect::<Vec<_>>()
                    .join("|");
                query.append_pair("location_type", &joined);
            }
        }
        format!("{}?{}", base, query.finish())
    }
}

fn append_address(query: &mut form_urlencoded::Serializer<'_, String>, address: &str) {
    if !address.is_empty() {
        query.append_pair("address", address);
    }
}

/// Component filters serialize as `token:value` entries joined with `|`,
/// iterated in descending key order; an empty map emits nothing
fn append_components(
    query: &mut form_urlencoded::Serializer<'_, String>,
    map: &BTreeMap<String, ComponentKind>,
) {
    if map.is_empty() {
        return;
    }
    let joined = map
        .iter()
        .rev()
        .map(|(value, kind)| format!("{}:{}", kind.token(), value))
        .collect::<Vec<_>>()
        .join("|");
    query.append_pair("components", &joined);
}
