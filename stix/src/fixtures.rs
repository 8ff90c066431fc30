//! Hydrated instances shared by the test suites.

use crate::store::StoreObject;
use serde_json::{json, Value};

pub const INDEX: &str = "opencti_stix_domain_objects-000001";

/// Builds a fully loaded instance from its type, standard id and attributes
pub fn store_object(entity_type: &str, standard_id: &str, attributes: Value) -> StoreObject {
    StoreObject::from_value(object_value(entity_type, standard_id, attributes)).unwrap()
}

/// The JSON form of a fully loaded instance, for embedding in relation slots
pub fn object_value(entity_type: &str, standard_id: &str, attributes: Value) -> Value {
    let mut value = json!({
        "internal_id": format!("internal-{}", standard_id.rsplit("--").next().unwrap_or_default()),
        "standard_id": standard_id,
        "entity_type": entity_type,
        "_index": INDEX,
        "created_at": "2023-02-10T10:20:30.123Z",
        "updated_at": "2023-02-11T11:21:31.456Z"
    });
    if let (Some(base), Value::Object(extra)) = (value.as_object_mut(), attributes) {
        base.extend(extra);
    }
    value
}

pub fn organization() -> Value {
    object_value(
        "Organization",
        "identity--f431f809-377b-45e0-aa1c-6a4751cae5ff",
        json!({ "name": "ACME", "identity_class": "organization" }),
    )
}

pub fn tlp_green() -> Value {
    object_value(
        "Marking-Definition",
        "marking-definition--34098fce-860f-48ae-8e50-ebd3cc5e41da",
        json!({ "definition_type": "TLP", "definition": "TLP:GREEN" }),
    )
}

pub fn label(value: &str, standard_id: &str) -> Value {
    object_value("Label", standard_id, json!({ "value": value, "color": "#ff0000" }))
}

pub fn external_reference() -> Value {
    object_value(
        "External-Reference",
        "external-reference--a6c5d6e1-7a5f-5ffa-a4cf-0a1f0e0b0c0d",
        json!({
            "source_name": "mitre-attack",
            "url": "https://attack.mitre.org/techniques/T1059",
            "external_id": "T1059"
        }),
    )
}

pub fn kill_chain_phase() -> Value {
    object_value(
        "Kill-Chain-Phase",
        "kill-chain-phase--2a4ad0a8-b2d4-5b0d-9a2b-4a6e9a6fa6c1",
        json!({ "kill_chain_name": "mitre-attack", "phase_name": "execution", "x_opencti_order": 4 }),
    )
}

pub fn ipv4(value: &str, standard_id: &str) -> Value {
    object_value("IPv4-Addr", standard_id, json!({ "value": value }))
}

/// Common meta relations, ready to be merged into the attributes of an instance
pub fn meta_relations() -> Value {
    json!({
        "created-by": organization(),
        "object-marking": [tlp_green()],
        "object-labels": [
            label("malicious", "label--1b2c3d4e-5f60-5718-9a0b-1c2d3e4f5a6b"),
            label("", "label--2b2c3d4e-5f60-5718-9a0b-1c2d3e4f5a6b")
        ],
        "external-references": [external_reference()]
    })
}

/// Merges two JSON objects, the second one taking precedence
pub fn merge(first: Value, second: Value) -> Value {
    let mut merged = first;
    if let (Some(base), Value::Object(extra)) = (merged.as_object_mut(), second) {
        base.extend(extra);
    }
    merged
}
