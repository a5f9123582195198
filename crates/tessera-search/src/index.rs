use tantivy::{Index, IndexWriter};
use tracing::info;

use tessera_core::schema::build_schema;

use crate::error::SearchError;

/// Memory budget for the single indexing thread.
const WRITER_MEMORY_BUDGET: usize = 50_000_000;

/// Create a new empty content index held in memory.
pub fn create_index_in_ram() -> Index {
    info!("creating in-memory content index");
    Index::create_in_ram(build_schema())
}

/// Open a single-threaded writer on `index`.
pub fn open_writer(index: &Index) -> Result<IndexWriter, SearchError> {
    let writer = index.writer_with_num_threads(1, WRITER_MEMORY_BUDGET)?;
    Ok(writer)
}
