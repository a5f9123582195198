//! Normalized view of a content item, ready for indexing.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tantivy::TantivyDocument;
use tantivy::schema::Schema;

use tessera_core::content::ContentData;
use tessera_core::geo::GeoGeometry;
use tessera_core::schema::field;

use crate::error::SearchError;
use crate::geo::extract_geo;
use crate::text::extract_texts;

/// Both derived views of one content item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedContent {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<BTreeMap<String, GeoGeometry>>,
}

/// Run the text and geo extractors over `data`.
pub fn normalize(id: &str, data: &ContentData) -> NormalizedContent {
    NormalizedContent {
        id: id.to_string(),
        texts: extract_texts(Some(data)),
        geo: extract_geo(data),
    }
}

/// Build a Tantivy document for the content index schema.
pub fn build_document(
    schema: &Schema,
    content: &NormalizedContent,
) -> Result<TantivyDocument, SearchError> {
    let mut json = Map::new();
    json.insert(field::ID.to_string(), Value::String(content.id.clone()));

    if let Some(texts) = &content.texts {
        json.insert(field::TEXTS.to_string(), serde_json::to_value(texts)?);

        let joined = texts.values().map(String::as_str).collect::<Vec<_>>().join(" ");
        json.insert(field::ALL_TEXTS.to_string(), Value::String(joined));
    }
    if let Some(geo) = &content.geo {
        let mut geometries = Map::new();
        for (slot, geometry) in geo {
            geometries.insert(slot.clone(), geometry.to_json_value()?);
        }
        json.insert(field::GEO.to_string(), Value::Object(geometries));
    }

    TantivyDocument::parse_json(schema, &Value::Object(json).to_string())
        .map_err(|e| SearchError::Document(e.to_string()))
}
