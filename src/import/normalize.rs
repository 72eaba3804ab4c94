//! Flat-vs-nested payload normalization.
//!
//! Weekly files come in two shapes: a flat `{entity_id: text}` map, or a
//! `{week: {entity_id: text}}` map covering several weeks. The shape is
//! decided by one rule: if the first value of the top-level object (in
//! document order) is a string, the payload is flat.

use serde_json::Value;
use std::collections::BTreeMap;

/// Normalize a weekly payload into `entity_id -> text` for `week`.
///
/// Returns `None` when the text is not JSON or the top level is not an
/// object; the importer treats that as "try the next spec". A nested payload
/// without a branch for `week` normalizes to an empty map, which is a
/// successful zero-entry import.
pub fn normalize_weekly_payload(text: &str, week: u32) -> Option<BTreeMap<String, String>> {
    let value: Value = serde_json::from_str(text).ok()?;
    let top = value.as_object()?;

    let flat = matches!(top.values().next(), Some(Value::String(_)));
    let map = if flat {
        top
    } else {
        match top.get(&week.to_string()) {
            Some(Value::Object(inner)) => inner,
            // Absent (or non-object) week branch: zero entries, still a success.
            _ => return Some(BTreeMap::new()),
        }
    };

    let mut entries = BTreeMap::new();
    for (entity_id, blurb) in map {
        match blurb {
            Value::String(s) => {
                entries.insert(entity_id.clone(), s.clone());
            }
            Value::Null => {
                entries.insert(entity_id.clone(), String::new());
            }
            _ => {}
        }
    }
    Some(entries)
}
