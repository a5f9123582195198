use tantivy::collector::TopDocs;
use tantivy::query::{QueryParser, TermQuery};
use tantivy::schema::{IndexRecordOption, Value};
use tantivy::{Index, TantivyDocument};

use tessera_core::schema::ContentFields;

use crate::error::SearchError;

/// A matching content item.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub score: f32,
}

/// Full-text search over the extracted texts.
///
/// Bare terms (`hello`) match any language. A term can be scoped to one
/// language with a JSON path, e.g. `texts.en:hello`.
pub fn search(
    index: &Index,
    query_text: &str,
    limit: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let fields = ContentFields::resolve(&index.schema())?;
    let searcher = index.reader()?.searcher();

    let query = QueryParser::for_index(index, vec![fields.all_texts])
        .parse_query(query_text)
        .map_err(|e| SearchError::QueryParse(e.to_string()))?;

    searcher
        .search(&query, &TopDocs::with_limit(limit))?
        .into_iter()
        .map(|(score, doc_address)| -> Result<SearchResult, SearchError> {
            let doc = searcher.doc::<TantivyDocument>(doc_address)?;
            let id = doc
                .get_first(fields.id)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            Ok(SearchResult { id, score })
        })
        .collect()
}

/// The stored document for `id`, if one is committed.
pub fn find_by_id(index: &Index, id: &str) -> Result<Option<TantivyDocument>, SearchError> {
    let fields = ContentFields::resolve(&index.schema())?;
    let searcher = index.reader()?.searcher();
    let query = TermQuery::new(fields.id_term(id), IndexRecordOption::Basic);

    let hit = searcher.search(&query, &TopDocs::with_limit(1))?.into_iter().next();

    Ok(match hit {
        Some((_, doc_address)) => Some(searcher.doc::<TantivyDocument>(doc_address)?),
        None => None,
    })
}
