use tantivy::{Index, IndexWriter, Opstamp};
use tracing::{debug, info};

use tessera_core::content::ContentData;
use tessera_core::schema::ContentFields;

use crate::document::{build_document, normalize};
use crate::error::SearchError;

/// Normalize `data` and replace any indexed document with the same id.
///
/// Delete-then-add is the standard "update" pattern in Tantivy.
pub fn upsert_content(
    index: &Index,
    writer: &IndexWriter,
    id: &str,
    data: &ContentData,
) -> Result<(), SearchError> {
    let schema = index.schema();
    let fields = ContentFields::resolve(&schema)?;
    let content = normalize(id, data);
    let doc = build_document(&schema, &content)?;

    writer.delete_term(fields.id_term(id));
    writer.add_document(doc)?;

    debug!(
        id,
        languages = content.texts.as_ref().map_or(0, |t| t.len()),
        geometries = content.geo.as_ref().map_or(0, |g| g.len()),
        "content staged for indexing"
    );
    Ok(())
}

/// Stage removal of a content item. Takes effect on the next [`commit`].
pub fn delete_content(index: &Index, writer: &IndexWriter, id: &str) -> Result<(), SearchError> {
    let fields = ContentFields::resolve(&index.schema())?;
    writer.delete_term(fields.id_term(id));
    debug!(id, "content staged for deletion");
    Ok(())
}

/// Make staged upserts and deletions visible to new readers.
pub fn commit(writer: &mut IndexWriter) -> Result<Opstamp, SearchError> {
    let opstamp = writer.commit()?;
    info!(opstamp, "content index committed");
    Ok(opstamp)
}
