//! Geometry recovery from content slots.
//!
//! A slot is accepted either as a GeoJSON object (anything with a string
//! `type` that the GeoJSON deserializer accepts) or as a plain
//! `{ "latitude": .., "longitude": .. }` object. GeoJSON is tried first; the
//! latitude/longitude shape is only checked once GeoJSON has been ruled out.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use tessera_core::content::ContentData;
use tessera_core::geo::{self, GeoGeometry, GeoParseOutcome, GeoPoint};
use tessera_core::pool::{self, Pool};

/// Parse one JSON value as a geometry.
///
/// Never fails: the outcome says why a value was rejected, and the geometry
/// is only present on [`GeoParseOutcome::Success`].
pub fn parse(value: &Value) -> (GeoParseOutcome, Option<GeoGeometry>) {
    parse_with(value, pool::bytes())
}

/// Same as [`parse`], serializing GeoJSON candidates into a buffer from `pool`.
pub fn parse_with(
    value: &Value,
    pool: &Pool<Vec<u8>>,
) -> (GeoParseOutcome, Option<GeoGeometry>) {
    let Value::Object(obj) = value else {
        return (GeoParseOutcome::InvalidValue, None);
    };

    if let Some(geojson) = try_parse_geojson(obj, pool) {
        return (GeoParseOutcome::Success, Some(GeoGeometry::GeoJson(geojson)));
    }

    let Some(latitude) = number(obj, "latitude").filter(|lat| geo::is_valid_latitude(*lat)) else {
        return (GeoParseOutcome::InvalidLatitude, None);
    };

    let Some(longitude) = number(obj, "longitude") else {
        return (GeoParseOutcome::InvalidLongitude, None);
    };

    // Latitude is already in range, so only the longitude can be rejected here.
    match GeoPoint::new(latitude, longitude) {
        Ok(point) => (GeoParseOutcome::Success, Some(point.into())),
        Err(_) => (GeoParseOutcome::InvalidLongitude, None),
    }
}

/// Collect every parseable slot as `"{field}.{language}" → geometry`.
///
/// Returns `None` when no slot holds a geometry.
pub fn extract_geo(data: &ContentData) -> Option<BTreeMap<String, GeoGeometry>> {
    let mut result: Option<BTreeMap<String, GeoGeometry>> = None;

    for (field, language, value) in data.slots() {
        match parse(value) {
            (GeoParseOutcome::Success, Some(geometry)) => {
                result
                    .get_or_insert_with(BTreeMap::new)
                    .insert(format!("{field}.{language}"), geometry);
            }
            (outcome, _) => {
                trace!(field, language, ?outcome, "slot skipped");
            }
        }
    }

    debug!(
        geometries = result.as_ref().map_or(0, BTreeMap::len),
        "geo extraction complete"
    );

    result
}

/// Round-trip the object through the GeoJSON deserializer. Any failure means
/// "not GeoJSON" and is discarded.
fn try_parse_geojson(
    obj: &Map<String, Value>,
    pool: &Pool<Vec<u8>>,
) -> Option<geojson::GeoJson> {
    if !matches!(obj.get("type"), Some(Value::String(_))) {
        return None;
    }

    let mut buffer = pool.get();

    if let Err(e) = serde_json::to_writer(&mut *buffer, obj) {
        trace!(error = %e, "failed to serialize candidate GeoJSON");
        return None;
    }

    match serde_json::from_slice::<geojson::GeoJson>(&buffer) {
        Ok(geojson) => Some(geojson),
        Err(e) => {
            trace!(error = %e, "not a GeoJSON object, falling back to latitude/longitude");
            None
        }
    }
}

fn number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}
