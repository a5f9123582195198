//! Full-text extraction from content slots.
//!
//! Every string leaf of every field is appended to a per-language buffer,
//! separated by single spaces. Field names and object keys are dropped; only
//! the language groups the output.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use tracing::debug;

use tessera_core::content::ContentData;
use tessera_core::pool::{self, Pool, Pooled};

/// Extract one text per language using the shared string pool.
///
/// Returns `None` when there is no data or no language produced any text.
pub fn extract_texts(data: Option<&ContentData>) -> Option<BTreeMap<String, String>> {
    extract_texts_with(data, pool::strings())
}

/// Same as [`extract_texts`], drawing buffers from `pool`.
pub fn extract_texts_with(
    data: Option<&ContentData>,
    pool: &Pool<String>,
) -> Option<BTreeMap<String, String>> {
    let data = data?;

    // Dropping the accumulator returns its buffers, also when unwinding.
    let mut accumulator = TextAccumulator::new(pool);

    for (_, language, value) in data.slots() {
        append_json_text(&mut accumulator, language, value);
    }

    let texts = accumulator.finish();

    debug!(
        languages = texts.as_ref().map_or(0, BTreeMap::len),
        "text extraction complete"
    );

    texts
}

fn append_json_text(accumulator: &mut TextAccumulator<'_>, language: &str, value: &Value) {
    match value {
        Value::String(text) => accumulator.append(language, text),
        Value::Array(items) => {
            for item in items {
                append_json_text(accumulator, language, item);
            }
        }
        Value::Object(obj) => {
            for item in obj.values() {
                append_json_text(accumulator, language, item);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Per-call language → buffer map. Buffers are taken lazily on the first
/// non-blank text of a language.
struct TextAccumulator<'p> {
    pool: &'p Pool<String>,
    languages: HashMap<String, Pooled<'p, String>>,
}

impl<'p> TextAccumulator<'p> {
    fn new(pool: &'p Pool<String>) -> Self {
        Self {
            pool,
            languages: HashMap::new(),
        }
    }

    fn append(&mut self, language: &str, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        if !self.languages.contains_key(language) {
            self.languages.insert(language.to_owned(), self.pool.get());
        }

        let Some(buffer) = self.languages.get_mut(language) else {
            return;
        };

        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(text);
    }

    fn finish(self) -> Option<BTreeMap<String, String>> {
        let mut result: Option<BTreeMap<String, String>> = None;

        for (language, buffer) in &self.languages {
            if !buffer.is_empty() {
                result
                    .get_or_insert_with(BTreeMap::new)
                    .insert(language.clone(), buffer.as_str().to_owned());
            }
        }

        result
    }
}
