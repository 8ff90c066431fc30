#[cfg(test)]
mod test {
    use crate::{
        config::ConverterConfig,
        cyber_observable_objects::sco::convert_ip_addr,
        error::StixError as Error,
        extensions::{CYBER_OBSERVABLE_EXTENSION_ID, PLATFORM_EXTENSION_ID},
        fixtures::{ipv4, merge, meta_relations, object_value, store_object},
        json::find_empty_fields,
        normalize::Normalize,
        object::{convert_store_to_stix, StixProperties},
        taxonomy::ObservableType,
    };
    use serde_json::json;
    use strum::IntoEnumIterator;
    use test_log::test;

    const IPV4_ID: &str = "ipv4-addr--ff26c055-6336-5bc5-b98d-13d6226742dd";

    fn expected_stix_type(observable_type: ObservableType) -> &'static str {
        match observable_type {
            ObservableType::Artifact => "artifact",
            ObservableType::AutonomousSystem => "autonomous-system",
            ObservableType::CryptocurrencyWallet => "cryptocurrency-wallet",
            ObservableType::CryptographicKey => "cryptographic-key",
            ObservableType::Directory => "directory",
            ObservableType::DomainName => "domain-name",
            ObservableType::EmailAddr => "email-addr",
            ObservableType::EmailMessage => "email-message",
            ObservableType::EmailMimePartType => "email-mime-part-type",
            ObservableType::StixFile => "file",
            ObservableType::Hostname => "hostname",
            ObservableType::Ipv4Addr => "ipv4-addr",
            ObservableType::Ipv6Addr => "ipv6-addr",
            ObservableType::MacAddr => "mac-addr",
            ObservableType::Mutex => "mutex",
            ObservableType::NetworkTraffic => "network-traffic",
            ObservableType::Process => "process",
            ObservableType::Software => "software",
            ObservableType::Text => "text",
            ObservableType::Url => "url",
            ObservableType::UserAccount => "user-account",
            ObservableType::WindowsRegistryKey => "windows-registry-key",
            ObservableType::WindowsRegistryValueType => "windows-registry-value-type",
            ObservableType::X509Certificate => "x509-certificate",
        }
    }

    #[test]
    fn every_observable_type_maps_to_its_discriminator() {
        for observable_type in ObservableType::iter() {
            let stix_type = expected_stix_type(observable_type);
            let instance = store_object(
                observable_type.as_ref(),
                &format!("{}--0b2c4a4e-5c55-4a4b-9c52-3f0e3f0e3f0e", stix_type),
                json!({ "value": "minimal", "name": "minimal" }),
            );

            let stix = convert_store_to_stix(&instance).unwrap();
            assert_eq!(stix.object_type, stix_type);
            assert_eq!(stix.get_object_type(), "sco");
            assert!(matches!(stix.properties, StixProperties::Sco(_)));
        }
    }

    #[test]
    fn observables_carry_no_empty_field() {
        for observable_type in ObservableType::iter() {
            let stix_type = expected_stix_type(observable_type);
            let instance = store_object(
                observable_type.as_ref(),
                &format!("{}--0b2c4a4e-5c55-4a4b-9c52-3f0e3f0e3f0e", stix_type),
                merge(
                    json!({
                        "value": "",
                        "name": "sample",
                        "x_opencti_description": "",
                        "x_opencti_score": 40,
                        "protocols": [""]
                    }),
                    meta_relations(),
                ),
            );

            let stix = convert_store_to_stix(&instance).unwrap();
            assert_eq!(stix.clone().normalize(), Some(stix.clone()));
            let result = stix.to_value().unwrap();
            assert_eq!(find_empty_fields(&result), Vec::<String>::new());
        }
    }

    #[test]
    fn observable_context_in_extension() {
        let instance = store_object(
            "Domain-Name",
            "domain-name--8d8b0a3b-7d59-5c2c-8b0a-3a5f7c1c2d3e",
            merge(
                json!({
                    "value": "example.com",
                    "x_opencti_description": "C2 domain",
                    "x_opencti_score": 75,
                    "resolves-to": [ipv4("198.51.100.3", IPV4_ID)],
                    "linked-to": [ipv4("198.51.100.3", IPV4_ID)]
                }),
                meta_relations(),
            ),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        let observable = &result["extensions"][CYBER_OBSERVABLE_EXTENSION_ID];

        assert_eq!(result["type"], "domain-name");
        assert_eq!(result["value"], "example.com");
        assert_eq!(result["resolves_to_refs"], json!([IPV4_ID]));
        assert_eq!(
            result["object_marking_refs"],
            json!(["marking-definition--34098fce-860f-48ae-8e50-ebd3cc5e41da"])
        );
        assert!(result.get("labels").is_none());
        assert!(result.get("created_by_ref").is_none());

        assert_eq!(observable["extension_type"], "property-extension");
        assert_eq!(observable["labels"], json!(["malicious"]));
        assert_eq!(observable["description"], "C2 domain");
        assert_eq!(observable["score"], 75);
        assert_eq!(
            observable["created_by_ref"],
            "identity--f431f809-377b-45e0-aa1c-6a4751cae5ff"
        );
        assert_eq!(observable["linked_to_refs"], json!([IPV4_ID]));
        assert_eq!(observable["external_references"][0]["external_id"], "T1059");
    }

    #[test]
    fn bare_observable_context_is_dropped() {
        let instance = store_object(
            "Mac-Addr",
            "mac-addr--65cfcf98-8a6e-5a1b-8f61-379ac4f92d00",
            json!({ "value": "d2:fb:49:24:37:18" }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert!(result["extensions"]
            .get(CYBER_OBSERVABLE_EXTENSION_ID)
            .is_none());
        assert_eq!(result["extensions"][PLATFORM_EXTENSION_ID]["type"], "Mac-Addr");
    }

    #[test]
    fn custom_observable_context_at_top_level() {
        let instance = store_object(
            "Hostname",
            "hostname--1c3e2a7b-0f5d-5b4c-9a8e-2d6f4b3c1a0e",
            merge(
                json!({
                    "value": "srv-01.internal",
                    "x_opencti_description": "File server",
                    "x_opencti_score": 20
                }),
                meta_relations(),
            ),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();

        assert_eq!(result["type"], "hostname");
        assert_eq!(result["value"], "srv-01.internal");
        assert_eq!(result["labels"], json!(["malicious"]));
        assert_eq!(result["description"], "File server");
        assert_eq!(result["score"], 20);
        assert_eq!(
            result["created_by_ref"],
            "identity--f431f809-377b-45e0-aa1c-6a4751cae5ff"
        );
        assert!(result["extensions"]
            .get(CYBER_OBSERVABLE_EXTENSION_ID)
            .is_none());
        assert!(result["extensions"].get(PLATFORM_EXTENSION_ID).is_some());
    }

    #[test]
    fn file_keeps_empty_hashes() {
        let instance = store_object(
            "StixFile",
            "file--6e5e8f0f-3b4c-5f7d-9c2a-1b0d8e7f6a5b",
            json!({
                "name": "invoice.exe",
                "size": "1024",
                "x_opencti_additional_names": ["invoice.pdf.exe", ""],
                "parent-directory": object_value(
                    "Directory",
                    "directory--5e9a1c3b-2d4f-5a6b-8c7d-9e0f1a2b3c4d",
                    json!({ "path": "C:\\Temp" })
                ),
                "obs-content": object_value(
                    "Artifact",
                    "artifact--4c3b2a1f-0e9d-5c8b-a7f6-e5d4c3b2a1f0",
                    json!({})
                )
            }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();

        assert_eq!(result["type"], "file");
        assert_eq!(result["hashes"], json!({}));
        assert_eq!(result["size"], 1024);
        assert_eq!(
            result["parent_directory_ref"],
            "directory--5e9a1c3b-2d4f-5a6b-8c7d-9e0f1a2b3c4d"
        );
        assert_eq!(
            result["content_ref"],
            "artifact--4c3b2a1f-0e9d-5c8b-a7f6-e5d4c3b2a1f0"
        );
        assert_eq!(
            result["extensions"][CYBER_OBSERVABLE_EXTENSION_ID]["additional_names"],
            json!(["invoice.pdf.exe"])
        );
        assert_eq!(result["extensions"][PLATFORM_EXTENSION_ID]["type"], "StixFile");
        assert!(find_empty_fields(&result).is_empty());
    }

    #[test]
    fn artifact_hashes_are_kept() {
        let instance = store_object(
            "Artifact",
            "artifact--4c3b2a1f-0e9d-5c8b-a7f6-e5d4c3b2a1f0",
            json!({
                "mime_type": "application/zip",
                "url": "https://example.com/sample.zip",
                "hashes": { "SHA-256": "6db12788c37247f2316052e142f42f4b259d6561751e5f401a1ae2a6df9c674b" }
            }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert_eq!(
            result["hashes"]["SHA-256"],
            "6db12788c37247f2316052e142f42f4b259d6561751e5f401a1ae2a6df9c674b"
        );
        assert_eq!(result["url"], "https://example.com/sample.zip");
    }

    #[test]
    fn email_message_references() {
        let instance = store_object(
            "Email-Message",
            "email-message--72b7698f-10c2-565a-a2a6-b4996a2f2265",
            json!({
                "subject": "Invoice",
                "is_multipart": true,
                "attribute_date": "2023-02-10T10:20:30.123Z",
                "from": object_value(
                    "Email-Addr",
                    "email-addr--9b7e29b3-fd8d-562e-b3f0-8fc8134f5dda",
                    json!({ "value": "jdoe@example.com" })
                ),
                "to": [
                    object_value(
                        "Email-Addr",
                        "email-addr--d1b3bf0c-f02a-51a1-8102-11aba7959868",
                        json!({ "value": "mary@example.com" })
                    )
                ],
                "body-raw": object_value(
                    "Artifact",
                    "artifact--4c3b2a1f-0e9d-5c8b-a7f6-e5d4c3b2a1f0",
                    json!({})
                ),
                "body-multipart": [
                    object_value(
                        "Email-Mime-Part-Type",
                        "email-mime-part-type--2b0a0b3c-4d5e-5f60-8172-839405162738",
                        json!({ "content_type": "text/plain", "body": "Please pay" })
                    )
                ]
            }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();

        assert_eq!(result["date"], "2023-02-10T10:20:30.123Z");
        assert_eq!(
            result["from_ref"],
            "email-addr--9b7e29b3-fd8d-562e-b3f0-8fc8134f5dda"
        );
        assert_eq!(
            result["to_refs"],
            json!(["email-addr--d1b3bf0c-f02a-51a1-8102-11aba7959868"])
        );
        assert_eq!(
            result["body_multipart"],
            json!([{
                "content_type": "text/plain",
                "body": "Please pay",
                "body_raw_ref": "artifact--4c3b2a1f-0e9d-5c8b-a7f6-e5d4c3b2a1f0"
            }])
        );
        assert!(result.get("cc_refs").is_none());
        assert!(result.get("additional_header_fields").is_none());
    }

    #[test]
    fn email_address_belongs_to_first_account() {
        let instance = store_object(
            "Email-Addr",
            "email-addr--9b7e29b3-fd8d-562e-b3f0-8fc8134f5dda",
            json!({
                "value": "jdoe@example.com",
                "display_name": "John Doe",
                "belongs-to": [
                    object_value(
                        "User-Account",
                        "user-account--0d5b424b-93b8-5cd8-ac36-306e1789d63c",
                        json!({ "account_login": "jdoe" })
                    ),
                    object_value(
                        "User-Account",
                        "user-account--1d5b424b-93b8-5cd8-ac36-306e1789d63c",
                        json!({ "account_login": "john" })
                    )
                ]
            }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert_eq!(
            result["belongs_to_ref"],
            "user-account--0d5b424b-93b8-5cd8-ac36-306e1789d63c"
        );
    }

    #[test]
    fn network_traffic_prunes_ipfix() {
        let instance = store_object(
            "Network-Traffic",
            "network-traffic--2568d22a-8998-58eb-99ec-3c8ca74f527d",
            json!({
                "protocols": ["ipv4", "tcp"],
                "src_port": 443,
                "ipfix": { "minimum_ip_length": 32, "comment": "" },
                "src": ipv4("198.51.100.3", IPV4_ID),
                "encapsulates": []
            }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert_eq!(result["src_ref"], IPV4_ID);
        assert_eq!(result["src_port"], 443);
        assert_eq!(result["ipfix"], json!({ "minimum_ip_length": 32 }));
        assert!(result.get("dst_ref").is_none());
        assert!(result.get("encapsulates_refs").is_none());
    }

    #[test]
    fn dictionary_nulls_are_dropped() {
        let instance = store_object(
            "Network-Traffic",
            "network-traffic--2568d22a-8998-58eb-99ec-3c8ca74f527d",
            json!({ "ipfix": { "a": null, "b": 1 } }),
        );
        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert_eq!(result["ipfix"], json!({ "b": 1 }));

        let instance = store_object(
            "Process",
            "process--07bc30ca-ebc2-5f8c-9c2f-1a8b4b1c3d5e",
            json!({ "pid": 1221, "environment_variables": { "HOME": null } }),
        );
        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert!(result.get("environment_variables").is_none());
        assert!(find_empty_fields(&result).is_empty());
    }

    #[test]
    fn process_references() {
        let instance = store_object(
            "Process",
            "process--07bc30ca-ebc2-5f8c-9c2f-1a8b4b1c3d5e",
            json!({
                "pid": 1221,
                "command_line": "cmd.exe /c whoami",
                "environment_variables": { "PATH": "C:\\Windows" },
                "child": [
                    object_value(
                        "Process",
                        "process--17bc30ca-ebc2-5f8c-9c2f-1a8b4b1c3d5e",
                        json!({ "pid": 1300 })
                    )
                ],
                "creator-user": object_value(
                    "User-Account",
                    "user-account--0d5b424b-93b8-5cd8-ac36-306e1789d63c",
                    json!({})
                )
            }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert_eq!(result["pid"], 1221);
        assert_eq!(result["environment_variables"]["PATH"], "C:\\Windows");
        assert_eq!(
            result["child_refs"],
            json!(["process--17bc30ca-ebc2-5f8c-9c2f-1a8b4b1c3d5e"])
        );
        assert_eq!(
            result["creator_user_ref"],
            "user-account--0d5b424b-93b8-5cd8-ac36-306e1789d63c"
        );
    }

    #[test]
    fn registry_key_values() {
        let instance = store_object(
            "Windows-Registry-Key",
            "windows-registry-key--2ba37ae7-2745-5082-9dfd-9486dad41016",
            json!({
                "attribute_key": "HKEY_LOCAL_MACHINE\\Software\\Microsoft\\Windows\\CurrentVersion\\Run",
                "number_of_subkeys": 2,
                "values": [
                    object_value(
                        "Windows-Registry-Value-Type",
                        "windows-registry-value-type--3a1b2c3d-4e5f-5a6b-8c7d-8e9f0a1b2c3d",
                        json!({ "name": "Updater", "data": "C:\\updater.exe", "data_type": "REG_SZ" })
                    ),
                    object_value(
                        "Windows-Registry-Value-Type",
                        "windows-registry-value-type--4a1b2c3d-4e5f-5a6b-8c7d-8e9f0a1b2c3d",
                        json!({ "name": "" })
                    )
                ]
            }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert_eq!(
            result["key"],
            "HKEY_LOCAL_MACHINE\\Software\\Microsoft\\Windows\\CurrentVersion\\Run"
        );
        assert_eq!(
            result["values"],
            json!([{ "name": "Updater", "data": "C:\\updater.exe", "data_type": "REG_SZ" }])
        );
        assert_eq!(result["number_of_subkeys"], 2);
    }

    #[test]
    fn registry_value_is_a_new_sco() {
        let instance = store_object(
            "Windows-Registry-Value-Type",
            "windows-registry-value-type--3a1b2c3d-4e5f-5a6b-8c7d-8e9f0a1b2c3d",
            json!({ "name": "Updater", "data_type": "REG_SZ", "x_opencti_score": 10 }),
        );

        let result = convert_store_to_stix(&instance).unwrap().to_value().unwrap();
        assert_eq!(result["type"], "windows-registry-value-type");
        assert_eq!(result["score"], 10);
        assert!(result["extensions"]
            .get(CYBER_OBSERVABLE_EXTENSION_ID)
            .is_none());
    }

    #[test]
    fn certificate_extensions_block() {
        let bare = store_object(
            "X509-Certificate",
            "x509-certificate--463d7b2a-8516-5a50-a3d7-6f801465d5de",
            json!({ "serial_number": "36:f7:d4:32:f4:ab:70:ea:d3:ce:98:6e:ea:99:93:49:32:0a:b7:06" }),
        );
        let extended = store_object(
            "X509-Certificate",
            "x509-certificate--463d7b2a-8516-5a50-a3d7-6f801465d5de",
            json!({
                "issuer": "C=ZA, ST=Western Cape, L=Cape Town, O=Thawte",
                "subject": "C=US, O=Example",
                "basic_constraints": "critical,CA:TRUE, pathlen:0",
                "key_usage": ""
            }),
        );

        let bare = convert_store_to_stix(&bare).unwrap().to_value().unwrap();
        let extended = convert_store_to_stix(&extended).unwrap().to_value().unwrap();

        assert!(bare.get("x509_v3_extensions").is_none());
        assert_eq!(bare["hashes"], json!({}));
        assert_eq!(extended["subject"], "C=US, O=Example");
        assert_eq!(
            extended["x509_v3_extensions"],
            json!({ "basic_constraints": "critical,CA:TRUE, pathlen:0" })
        );
    }

    #[test]
    fn ip_projector_rejects_other_versions() {
        let instance = store_object("IPv4-Addr", IPV4_ID, json!({ "value": "198.51.100.3" }));

        let error =
            convert_ip_addr(&instance, ObservableType::Ipv6Addr, &ConverterConfig::default())
                .unwrap_err();
        assert!(matches!(error, Error::IncompatibleType { .. }));
        assert!(error.is_unsupported());
    }
}
