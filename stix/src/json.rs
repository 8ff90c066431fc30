//! Functions for serializing converted objects to JSON, and for auditing the resulting JSON.

use crate::error::StixError as Error;
use serde::Serialize;
use serde_json::Value;

/// Serializes any value to a compact JSON String
pub fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|e| Error::SerializationError(e.to_string()))
}

/// Serializes any value to an indented JSON String
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(|e| Error::SerializationError(e.to_string()))
}

/// Serializes any value to a generic JSON value
pub fn to_value<T: Serialize>(value: &T) -> Result<Value, Error> {
    serde_json::to_value(value).map_err(|e| Error::SerializationError(e.to_string()))
}

/// Lists the paths of every empty field in a JSON document.
///
/// A field is empty when it holds `null`, an empty string, an empty array or an empty object. Hash mappings, found under
/// a `hashes` key, are allowed to be empty objects.
// Paths are dot separated, with array positions written as `[index]`
pub fn find_empty_fields(value: &Value) -> Vec<String> {
    let mut empty_fields = Vec::new();
    collect_empty_fields(value, "", &mut empty_fields);
    empty_fields
}

fn collect_empty_fields(value: &Value, path: &str, empty_fields: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                let empty_hashes = key == "hashes" && matches!(child, Value::Object(m) if m.is_empty());
                if is_empty_value(child) && !empty_hashes {
                    empty_fields.push(child_path.clone());
                }
                collect_empty_fields(child, &child_path, empty_fields);
            }
        }
        Value::Array(values) => {
            for (index, child) in values.iter().enumerate() {
                let child_path = format!("{}[{}]", path, index);
                if is_empty_value(child) {
                    empty_fields.push(child_path.clone());
                }
                collect_empty_fields(child, &child_path, empty_fields);
            }
        }
        _ => {}
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(values) => values.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::json::find_empty_fields;
    use serde_json::json;
    use test_log::test;

    #[test]
    fn find_nested_empty_fields() {
        let value = json!({
            "name": "",
            "hashes": {},
            "labels": ["a", ""],
            "extensions": {
                "ext": { "extension_type": "property-extension", "aliases": [] }
            },
            "count": 0,
            "flag": false
        });

        let mut empty_fields = find_empty_fields(&value);
        empty_fields.sort();
        assert_eq!(
            empty_fields,
            vec![
                "extensions.ext.aliases".to_string(),
                "labels[1]".to_string(),
                "name".to_string(),
            ]
        );
    }

    #[test]
    fn empty_hashes_are_allowed() {
        let value = json!({ "external_references": [{ "source_name": "capec", "hashes": {} }] });
        assert!(find_empty_fields(&value).is_empty());
    }
}
