use std::collections::BTreeMap;
use std::thread;

use serde_json::json;
use tessera_core::content::ContentData;
use tessera_core::pool::Pool;
use tessera_search::text::{extract_texts, extract_texts_with};

fn content(value: serde_json::Value) -> ContentData {
    ContentData::from_json_value(value).unwrap()
}

fn texts(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn joins_fields_of_one_language_with_a_space() {
    let data = content(json!({
        "title": { "en": "Hello" },
        "body": { "en": "World" }
    }));

    assert_eq!(extract_texts(Some(&data)), Some(texts(&[("en", "Hello World")])));
}

#[test]
fn groups_by_language() {
    let data = content(json!({
        "title": { "en": "Hello", "de": "Hallo" },
        "body": { "de": "Welt", "en": "World" }
    }));

    assert_eq!(
        extract_texts(Some(&data)),
        Some(texts(&[("en", "Hello World"), ("de", "Hallo Welt")]))
    );
}

#[test]
fn blank_strings_contribute_nothing() {
    let data = content(json!({ "f": { "en": "   " }, "g": { "en": "" } }));
    assert_eq!(extract_texts(Some(&data)), None);

    let data = content(json!({ "f": { "en": ["", "a", "\t\n", "b"] } }));
    assert_eq!(extract_texts(Some(&data)), Some(texts(&[("en", "a b")])));
}

#[test]
fn strings_are_appended_untrimmed() {
    let data = content(json!({ "f": { "en": [" a ", "b"] } }));
    assert_eq!(extract_texts(Some(&data)), Some(texts(&[("en", " a  b")])));
}

#[test]
fn nested_arrays_are_flattened_in_order() {
    let data = content(json!({ "f": { "en": ["a", ["b", "c"]] } }));
    assert_eq!(extract_texts(Some(&data)), Some(texts(&[("en", "a b c")])));
}

#[test]
fn object_values_are_visited_and_keys_ignored() {
    let data = content(json!({
        "components": {
            "iv": [
                { "kind": "hero", "caption": "Sunrise", "size": 3, "visible": true },
                { "items": [{ "label": "one" }, { "label": null }] }
            ]
        }
    }));

    assert_eq!(
        extract_texts(Some(&data)),
        Some(texts(&[("iv", "hero Sunrise one")]))
    );
}

#[test]
fn scalars_are_ignored() {
    let data = content(json!({
        "n": { "en": 42 },
        "b": { "en": false },
        "z": { "en": null },
        "s": null
    }));

    assert_eq!(extract_texts(Some(&data)), None);
}

#[test]
fn absent_or_empty_input_is_none() {
    assert_eq!(extract_texts(None), None);
    assert_eq!(extract_texts(Some(&ContentData::new())), None);
}

#[test]
fn extraction_is_idempotent() {
    let data = content(json!({
        "title": { "en": "Hello", "de": "Hallo" },
        "tags": { "en": ["x", "y"] }
    }));

    let first = extract_texts(Some(&data));
    let second = extract_texts(Some(&data));
    assert_eq!(first, second);
    assert_eq!(first, Some(texts(&[("en", "Hello x y"), ("de", "Hallo")])));
}

#[test]
fn buffers_are_returned_and_reused_without_leftovers() {
    let pool: Pool<String> = Pool::default();

    let first = content(json!({ "f": { "en": "first call", "de": "erster" } }));
    extract_texts_with(Some(&first), &pool);
    assert_eq!(pool.idle(), 2);

    let second = content(json!({ "f": { "en": "second" } }));
    assert_eq!(
        extract_texts_with(Some(&second), &pool),
        Some(texts(&[("en", "second")]))
    );
    assert_eq!(pool.idle(), 2);
    assert!(pool.get().is_empty());
}

#[test]
fn buffers_are_returned_when_nothing_is_produced() {
    let pool: Pool<String> = Pool::default();

    let data = content(json!({ "f": { "en": 1 } }));
    assert_eq!(extract_texts_with(Some(&data), &pool), None);
    assert_eq!(pool.idle(), 0);
}

#[test]
fn concurrent_extractions_do_not_share_state() {
    let pool: Pool<String> = Pool::default();

    thread::scope(|s| {
        for worker in 0..8 {
            let pool = &pool;
            s.spawn(move || {
                let text = format!("worker{worker}");
                let data = content(json!({ "f": { "en": text.clone() } }));

                for _ in 0..100 {
                    assert_eq!(
                        extract_texts_with(Some(&data), pool),
                        Some(texts(&[("en", text.as_str())]))
                    );
                }
            });
        }
    });
}
