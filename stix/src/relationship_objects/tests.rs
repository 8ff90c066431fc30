#[cfg(test)]
mod test {
    use crate::{
        config::ConverterConfig,
        error::StixError as Error,
        extensions::PLATFORM_EXTENSION_ID,
        fixtures::{ipv4, kill_chain_phase, merge, meta_relations, object_value, store_object},
        json::find_empty_fields,
        object::{convert_store_to_stix, StixProperties},
        relationship_objects::{convert_sighting, RelationshipObject},
        taxonomy::{CoreRelationshipType, MetaRelationshipType, ObservableRelationshipType},
    };
    use serde_json::{json, Value};
    use strum::IntoEnumIterator;
    use test_log::test;

    const RELATIONSHIP_ID: &str = "relationship--57b56a43-b8b0-4cba-9deb-34e3e1faed9e";
    const SIGHTING_ID: &str = "sighting--ee20065d-2555-424f-ad9e-0f8263ac8d7f";
    const MALWARE_ID: &str = "malware--31b940d4-6f7f-459a-80ea-9c1f17b58abc";
    const ATTACK_PATTERN_ID: &str = "attack-pattern--7e33a43e-e34b-40ec-89da-36c9bb2cacd5";
    const FROM_ID: &str = "internal-31b940d4-6f7f-459a-80ea-9c1f17b58abc";
    const TO_ID: &str = "internal-7e33a43e-e34b-40ec-89da-36c9bb2cacd5";

    fn malware() -> Value {
        object_value("Malware", MALWARE_ID, json!({ "name": "Emotet" }))
    }

    fn attack_pattern() -> Value {
        object_value(
            "Attack-Pattern",
            ATTACK_PATTERN_ID,
            json!({ "name": "Command and Scripting Interpreter" }),
        )
    }

    fn endpoints() -> Value {
        json!({
            "fromId": FROM_ID,
            "toId": TO_ID,
            "from": malware(),
            "to": attack_pattern()
        })
    }

    #[test]
    fn convert_uses_relationship() {
        let instance = store_object(
            "uses",
            RELATIONSHIP_ID,
            merge(
                merge(
                    json!({
                        "relationship_type": "uses",
                        "description": "Emotet runs PowerShell",
                        "start_time": "2023-01-01T00:00:00.001Z",
                        "confidence": 80,
                        "kill-chain-phases": [kill_chain_phase()]
                    }),
                    meta_relations(),
                ),
                endpoints(),
            ),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        let platform = &result["extensions"][PLATFORM_EXTENSION_ID];

        assert_eq!(result["type"], "relationship");
        assert_eq!(result["relationship_type"], "uses");
        assert_eq!(result["source_ref"], MALWARE_ID);
        assert_eq!(result["target_ref"], ATTACK_PATTERN_ID);
        assert_eq!(result["start_time"], "2023-01-01T00:00:00.001Z");
        assert_eq!(result["confidence"], 80);
        assert_eq!(result["labels"], json!(["malicious"]));
        assert!(result.get("kill_chain_phases").is_none());

        assert_eq!(platform["source_ref"], FROM_ID);
        assert_eq!(platform["source_type"], "Malware");
        assert_eq!(platform["target_ref"], TO_ID);
        assert_eq!(platform["target_type"], "Attack-Pattern");
        assert_eq!(
            platform["kill_chain_phases"],
            json!([{ "kill_chain_name": "mitre-attack", "phase_name": "execution" }])
        );
        assert!(find_empty_fields(&result).is_empty());
    }

    #[test]
    fn every_relationship_type_maps_to_relationship() {
        let types = CoreRelationshipType::iter()
            .map(|t| t.to_string())
            .chain(ObservableRelationshipType::iter().map(|t| t.to_string()))
            .chain(MetaRelationshipType::iter().map(|t| t.to_string()));

        for relationship_type in types {
            let instance = store_object(&relationship_type, RELATIONSHIP_ID, endpoints());

            let stix = convert_store_to_stix(&instance).unwrap();
            assert_eq!(stix.object_type, "relationship");
            assert_eq!(stix.get_object_type(), "sro");
            match stix.properties {
                StixProperties::Sro(relationship @ RelationshipObject::Relationship(_)) => {
                    assert_eq!(relationship.get_relationship_type(), relationship_type);
                }
                other => panic!("unexpected properties {other:?}"),
            }
        }
    }

    #[test]
    fn observable_relationship() {
        let instance = store_object(
            "obs_resolves-to",
            RELATIONSHIP_ID,
            json!({
                "relationship_type": "obs_resolves-to",
                "fromId": "internal-8d8b0a3b-7d59-5c2c-8b0a-3a5f7c1c2d3e",
                "toId": "internal-ff26c055-6336-5bc5-b98d-13d6226742dd",
                "from": object_value(
                    "Domain-Name",
                    "domain-name--8d8b0a3b-7d59-5c2c-8b0a-3a5f7c1c2d3e",
                    json!({ "value": "example.com" })
                ),
                "to": ipv4("198.51.100.3", "ipv4-addr--ff26c055-6336-5bc5-b98d-13d6226742dd")
            }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert_eq!(result["type"], "relationship");
        assert_eq!(
            result["target_ref"],
            "ipv4-addr--ff26c055-6336-5bc5-b98d-13d6226742dd"
        );
        assert_eq!(
            result["extensions"][PLATFORM_EXTENSION_ID]["target_type"],
            "IPv4-Addr"
        );
    }

    #[test]
    fn inferred_relationship() {
        let mut instance = store_object("uses", RELATIONSHIP_ID, endpoints());
        instance.index = Some("opencti_inferred_relationships-000001".to_string());

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert_eq!(result["extensions"][PLATFORM_EXTENSION_ID]["is_inferred"], true);
    }

    #[test]
    fn unresolved_target_is_rejected() {
        let instance = store_object(
            "uses",
            RELATIONSHIP_ID,
            json!({ "fromId": FROM_ID, "toId": TO_ID, "from": malware() }),
        );

        let error = convert_store_to_stix(&instance).unwrap_err();
        assert!(error.is_unsupported());
        assert_eq!(
            error.to_string(),
            format!("Cannot convert relation without a resolved to: {}", TO_ID)
        );
    }

    #[test]
    fn unresolved_source_is_checked_first() {
        let instance = store_object(
            "uses",
            RELATIONSHIP_ID,
            json!({ "fromId": FROM_ID, "toId": TO_ID, "from": [] }),
        );

        match convert_store_to_stix(&instance).unwrap_err() {
            Error::UnresolvedRelation { endpoint, id } => {
                assert_eq!(endpoint, "from");
                assert_eq!(id, FROM_ID);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unresolved_sighting_is_rejected() {
        let instance = store_object(
            "stix-sighting-relationship",
            SIGHTING_ID,
            json!({ "fromId": FROM_ID, "toId": TO_ID, "from": malware(), "to": [] }),
        );

        match convert_store_to_stix(&instance).unwrap_err() {
            Error::UnresolvedRelation { endpoint, id } => {
                assert_eq!(endpoint, "to");
                assert_eq!(id, TO_ID);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn convert_sighting_relationship() {
        let instance = store_object(
            "stix-sighting-relationship",
            SIGHTING_ID,
            json!({
                "fromId": FROM_ID,
                "toId": "internal-f431f809-377b-45e0-aa1c-6a4751cae5ff",
                "from": malware(),
                "to": object_value(
                    "Organization",
                    "identity--f431f809-377b-45e0-aa1c-6a4751cae5ff",
                    json!({ "name": "ACME" })
                ),
                "first_seen": "2023-02-01T08:00:00.100Z",
                "last_seen": "2023-02-02T08:00:00.100Z",
                "attribute_count": 3,
                "x_opencti_negative": false
            }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        let platform = &result["extensions"][PLATFORM_EXTENSION_ID];

        assert_eq!(result["type"], "sighting");
        assert_eq!(result["count"], 3);
        assert_eq!(result["sighting_of_ref"], MALWARE_ID);
        assert_eq!(
            result["where_sighted_refs"],
            json!(["identity--f431f809-377b-45e0-aa1c-6a4751cae5ff"])
        );
        assert!(result.get("observed_data_refs").is_none());
        assert!(result.get("summary").is_none());

        assert_eq!(platform["sighting_of_ref"], FROM_ID);
        assert_eq!(platform["sighting_of_type"], "Malware");
        assert_eq!(
            platform["where_sighted_refs"],
            json!(["internal-f431f809-377b-45e0-aa1c-6a4751cae5ff"])
        );
        assert_eq!(platform["where_sighted_types"], json!(["Organization"]));
        assert_eq!(platform["negative"], false);
    }

    #[test]
    fn sighting_projector_rejects_relationships() {
        let instance = store_object("uses", RELATIONSHIP_ID, endpoints());

        let error = convert_sighting(&instance, &ConverterConfig::default()).unwrap_err();
        assert!(matches!(error, Error::IncompatibleType { .. }));
    }
}
