//! The field → language → value tree that every content item carries.
//!
//! Both maps keep insertion order, so iteration follows the order in which
//! fields and languages were authored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// Values of one field, keyed by language code (`"en"`, `"de"`, `"iv"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentFieldData(IndexMap<String, Value>);

impl ContentFieldData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests and fixtures.
    pub fn with(mut self, language: impl Into<String>, value: Value) -> Self {
        self.0.insert(language.into(), value);
        self
    }

    pub fn insert(&mut self, language: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(language.into(), value)
    }

    pub fn get(&self, language: &str) -> Option<&Value> {
        self.0.get(language)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// All fields of a content item. A field may be present with a `null`
/// partition, which is kept as `None` and skipped by readers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentData(IndexMap<String, Option<ContentFieldData>>);

impl ContentData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, data: ContentFieldData) -> Self {
        self.0.insert(field.into(), Some(data));
        self
    }

    pub fn insert(
        &mut self,
        field: impl Into<String>,
        data: Option<ContentFieldData>,
    ) -> Option<Option<ContentFieldData>> {
        self.0.insert(field.into(), data)
    }

    pub fn get(&self, field: &str) -> Option<&ContentFieldData> {
        self.0.get(field).and_then(Option::as_ref)
    }

    /// Iterate `(field, language, value)` triples, fields first and then
    /// languages, skipping `null` partitions.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &str, &Value)> {
        self.0.iter().flat_map(|(field, data)| {
            data.iter()
                .flat_map(|d| d.iter())
                .map(move |(language, value)| (field.as_str(), language, value))
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json_str(s: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_value(value: Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(value)?)
    }
}
