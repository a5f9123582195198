use tantivy::Term;
use tantivy::schema::{Field, STORED, STRING, Schema, TEXT};

use crate::error::CoreError;

/// Field names used in the Tantivy index.
pub mod field {
    pub const ID: &str = "id";
    /// JSON object: language code → extracted text.
    pub const TEXTS: &str = "texts";
    /// Every language's text joined, the target of unscoped queries.
    pub const ALL_TEXTS: &str = "all_texts";
    /// JSON object: `field.language` → GeoJSON.
    pub const GEO: &str = "geo";
}

/// Build the Tantivy schema used by the Tessera content index.
pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();

    // Content id — stored and indexed as an exact string
    builder.add_text_field(field::ID, STRING | STORED);

    // One JSON path per language (`texts.en:hello`)
    builder.add_json_field(field::TEXTS, TEXT | STORED);

    // Language-agnostic search (`hello`)
    builder.add_text_field(field::ALL_TEXTS, TEXT);

    // Geometries are stored for the geo indexer, not searched here
    builder.add_json_field(field::GEO, STORED);

    builder.build()
}

/// Field handles of the content index, looked up once per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentFields {
    pub id: Field,
    pub texts: Field,
    pub all_texts: Field,
    pub geo: Field,
}

impl ContentFields {
    /// Fails if `schema` was not built by [`build_schema`].
    pub fn resolve(schema: &Schema) -> Result<Self, CoreError> {
        let lookup = |name: &str| {
            schema
                .get_field(name)
                .map_err(|_| CoreError::MissingSchemaField(name.to_string()))
        };

        Ok(Self {
            id: lookup(field::ID)?,
            texts: lookup(field::TEXTS)?,
            all_texts: lookup(field::ALL_TEXTS)?,
            geo: lookup(field::GEO)?,
        })
    }

    /// Exact-match term on the content id.
    pub fn id_term(&self, id: &str) -> Term {
        Term::from_field_text(self.id, id)
    }
}
