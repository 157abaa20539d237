//! Response Envelopes
//!
//! The API answers some endpoints with a bare value and others with the value
//! wrapped under a named field. This is the one place that tells them apart.
//!
//! Collections: a bare array wins, then each wrapper field in the order the
//! resource lists them, then an empty list.
//! Records: a bare object carrying `_id`/`id` wins, then each wrapper field
//! that holds an object, then nothing.

use serde_json::Value;

/// Rows of a list response
pub fn collection(value: Value, fields: &[&str]) -> Vec<Value> {
    match value {
        Value::Array(rows) => rows,
        Value::Object(mut map) => fields
            .iter()
            .find_map(|field| match map.remove(*field) {
                Some(Value::Array(rows)) => Some(rows),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// The record of a single-item response
pub fn record(value: Value, fields: &[&str]) -> Option<Value> {
    if is_record(&value) {
        return Some(value);
    }
    let Value::Object(mut map) = value else {
        return None;
    };
    fields.iter().find_map(|field| match map.remove(*field) {
        Some(inner @ Value::Object(_)) => Some(inner),
        _ => None,
    })
}

fn is_record(value: &Value) -> bool {
    value.get("_id").is_some() || value.get("id").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[&str] = &["categories", "data"];

    #[test]
    fn test_bare_list() {
        let rows = collection(json!([{"_id": "a"}, {"_id": "b"}]), FIELDS);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_wrapped_list_respects_priority() {
        let value = json!({
            "data": [{"_id": "from-data"}],
            "categories": [{"_id": "from-categories"}]
        });
        let rows = collection(value, FIELDS);
        assert_eq!(rows, vec![json!({"_id": "from-categories"})]);

        let rows = collection(json!({"success": true, "data": [{"_id": "x"}]}), FIELDS);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_unknown_shapes_are_empty() {
        assert!(collection(json!({"categories": "nope"}), FIELDS).is_empty());
        assert!(collection(json!({"items": [1, 2]}), FIELDS).is_empty());
        assert!(collection(json!(null), FIELDS).is_empty());
        assert!(collection(json!("text"), FIELDS).is_empty());
    }

    #[test]
    fn test_record_shapes() {
        let bare = json!({"_id": "j1", "title": "Intern"});
        assert_eq!(record(bare.clone(), &["job", "data"]), Some(bare.clone()));

        let wrapped = json!({"success": true, "job": {"_id": "j1", "title": "Intern"}});
        assert_eq!(record(wrapped, &["job", "data"]), Some(bare));

        assert_eq!(record(json!({"message": "ok"}), &["job", "data"]), None);
        assert_eq!(record(json!([]), &["job"]), None);
    }
}
