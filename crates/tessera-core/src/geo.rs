//! Geometry types produced from content fields.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::CoreError;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Returns true if `latitude` lies within [-90, 90]. NaN is rejected.
pub fn is_valid_latitude(latitude: f64) -> bool {
    (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
}

/// Returns true if `longitude` lies within [-180, 180]. NaN is rejected.
pub fn is_valid_longitude(longitude: f64) -> bool {
    (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

/// A WGS84 point. Only constructible with in-range coordinates.
///
/// Stored in GeoJSON axis order: longitude first, then latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !is_valid_latitude(latitude) || !is_valid_longitude(longitude) {
            return Err(CoreError::CoordinateOutOfRange {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `[longitude, latitude]`, the GeoJSON position of this point.
    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// A geometry recovered from a content slot.
///
/// `Point` is built from an explicit latitude/longitude pair. `GeoJson` holds
/// whatever the GeoJSON deserializer produced, passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoGeometry {
    Point(GeoPoint),
    GeoJson(geojson::GeoJson),
}

impl GeoGeometry {
    pub fn as_point(&self) -> Option<&GeoPoint> {
        match self {
            GeoGeometry::Point(point) => Some(point),
            GeoGeometry::GeoJson(_) => None,
        }
    }

    /// Convert to a GeoJSON object, building a `Point` geometry if needed.
    pub fn to_geojson(&self) -> geojson::GeoJson {
        match self {
            GeoGeometry::Point(point) => {
                let value = geojson::Value::Point(point.position().to_vec());
                geojson::GeoJson::Geometry(geojson::Geometry::new(value))
            }
            GeoGeometry::GeoJson(geojson) => geojson.clone(),
        }
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<GeoPoint> for GeoGeometry {
    fn from(point: GeoPoint) -> Self {
        GeoGeometry::Point(point)
    }
}

impl Serialize for GeoGeometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GeoGeometry::GeoJson(geojson) => geojson.serialize(serializer),
            GeoGeometry::Point(_) => self.to_geojson().serialize(serializer),
        }
    }
}

/// Outcome of parsing one JSON value as a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoParseOutcome {
    Success,
    /// The value is not a JSON object.
    InvalidValue,
    /// `latitude` is missing, not a number, or outside [-90, 90].
    InvalidLatitude,
    /// `longitude` is missing, not a number, or outside [-180, 180].
    InvalidLongitude,
}

impl GeoParseOutcome {
    pub fn is_success(self) -> bool {
        self == GeoParseOutcome::Success
    }

    /// Validation message shown to authors for a rejected value.
    pub fn message(self) -> &'static str {
        match self {
            GeoParseOutcome::Success => "Valid geolocation.",
            GeoParseOutcome::InvalidValue => {
                "Geolocation must be an object with latitude and longitude or a GeoJSON object."
            }
            GeoParseOutcome::InvalidLatitude => "Latitude must be between -90 and 90.",
            GeoParseOutcome::InvalidLongitude => "Longitude must be between -180 and 180.",
        }
    }
}

impl fmt::Display for GeoParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
