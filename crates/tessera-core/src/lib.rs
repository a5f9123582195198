//! tessera-core
//!
//! Content tree types, geometry types, buffer pools, and the Tantivy schema.
//! No parsing or indexing logic lives here; this is the shared vocabulary of
//! the Tessera system.

pub mod config;
pub mod content;
pub mod error;
pub mod geo;
pub mod pool;
pub mod schema;
