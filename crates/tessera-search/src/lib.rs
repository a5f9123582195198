//! tessera-search
//!
//! Derives the geo and full-text views of a content item and feeds them into
//! a Tantivy index.

pub mod document;
pub mod error;
pub mod geo;
pub mod index;
pub mod mutate;
pub mod query;
pub mod text;
