//! Properties shared by every converted object, and the builders of the common layers projectors start from.

use crate::{
    config::ConverterConfig,
    error::StixError as Error,
    extensions::{CyberObservableExtension, Extensions, PlatformExtension},
    normalize::normalize_struct,
    store::{all, single, Resolved, StoreObject},
    taxonomy::convert_type_to_stix_type,
    types::{Hashes, Identifier, Timestamp},
};
use serde::Serialize;
use serde_with::skip_serializing_none;

/// The only STIX version objects are converted to
pub const SPEC_VERSION: &str = "2.1";

/// The properties found on every converted object: identity, STIX version, type and extensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    pub id: Identifier,
    pub spec_version: String,
    pub object_type: String,
    pub extensions: Extensions,
}

impl Envelope {
    /// Builds the envelope of an instance, with its platform extension
    pub fn new(instance: &StoreObject, config: &ConverterConfig) -> Self {
        Self {
            id: instance.standard_id.clone(),
            spec_version: SPEC_VERSION.to_string(),
            object_type: convert_type_to_stix_type(&instance.entity_type),
            extensions: Extensions::platform(PlatformExtension::new(instance, config)),
        }
    }

    /// Builds the envelope of a cyber-observable, which also carries the cyber-observable extension
    pub fn observable(instance: &StoreObject, config: &ConverterConfig) -> Self {
        let envelope = Self::new(instance, config);
        Self {
            extensions: envelope
                .extensions
                .with_cyber_observable(CyberObservableExtension::new(instance)),
            ..envelope
        }
    }

    /// Applies a transformation to the extensions
    pub fn map_extensions(self, f: impl FnOnce(Extensions) -> Extensions) -> Self {
        Self {
            extensions: f(self.extensions),
            ..self
        }
    }
}

/// Checks that an instance has exactly the internal type a projector expects
pub fn assert_type(instance: &StoreObject, expected: impl AsRef<str>) -> Result<(), Error> {
    if instance.entity_type != expected.as_ref() {
        return Err(Error::IncompatibleType {
            instance_type: instance.entity_type.clone(),
            expected: expected.as_ref().to_string(),
        });
    }
    Ok(())
}

/// The standard id of the record resolved in a single-valued relation slot
pub fn single_ref(slot: &Option<Resolved>) -> Option<Identifier> {
    single(slot).map(|object| object.standard_id.clone())
}

/// The standard ids of the records resolved in a relation slot, in order
pub fn refs(slot: &Option<Resolved>) -> Option<Vec<Identifier>> {
    Some(
        all(slot)
            .iter()
            .map(|object| object.standard_id.clone())
            .collect(),
    )
}

/// The values of the labels attached to an instance
pub fn label_values(instance: &StoreObject) -> Option<Vec<String>> {
    Some(
        all(&instance.relations.object_labels)
            .iter()
            .filter_map(|label| label.attributes.value.clone())
            .collect(),
    )
}

/// The external references attached to an instance
pub fn external_references(instance: &StoreObject) -> Option<Vec<ExternalReference>> {
    Some(
        all(&instance.relations.external_references)
            .iter()
            .map(ExternalReference::new)
            .collect(),
    )
}

/// The kill chain phases attached to an instance
pub fn kill_chain_phases(instance: &StoreObject) -> Option<Vec<KillChainPhase>> {
    Some(
        all(&instance.relations.kill_chain_phases)
            .iter()
            .map(KillChainPhase::new)
            .collect(),
    )
}

/// A kill chain phase, embedded in the objects it applies to.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_i4tjv75ce50h>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KillChainPhase {
    pub kill_chain_name: Option<String>,
    pub phase_name: Option<String>,
}

normalize_struct!(drop_empty KillChainPhase { kill_chain_name, phase_name });

impl KillChainPhase {
    pub fn new(phase: &StoreObject) -> Self {
        Self {
            kill_chain_name: phase.attributes.kill_chain_name.clone(),
            phase_name: phase.attributes.phase_name.clone(),
        }
    }
}

/// An external reference, embedded in the objects it applies to.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_72bcfr3t79jx>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExternalReference {
    pub source_name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub hashes: Option<Hashes>,
    pub external_id: Option<String>,
}

normalize_struct!(drop_empty ExternalReference {
    source_name,
    description,
    url,
    hashes,
    external_id,
});

impl ExternalReference {
    pub fn new(reference: &StoreObject) -> Self {
        let attributes = &reference.attributes;
        Self {
            source_name: attributes.source_name.clone(),
            description: attributes.description.clone(),
            url: attributes.url.clone(),
            hashes: attributes.hashes.clone(),
            external_id: attributes.external_id.clone(),
        }
    }
}

/// Properties common to domain objects and relationships.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DomainCommon {
    pub created: Option<Timestamp>,
    pub modified: Option<Timestamp>,
    pub revoked: Option<bool>,
    pub confidence: Option<u64>,
    pub lang: Option<String>,
    pub labels: Option<Vec<String>>,
    pub object_marking_refs: Option<Vec<Identifier>>,
    pub created_by_ref: Option<Identifier>,
    pub external_references: Option<Vec<ExternalReference>>,
}

normalize_struct!(retain DomainCommon {
    created,
    modified,
    revoked,
    confidence,
    lang,
    labels,
    object_marking_refs,
    created_by_ref,
    external_references,
});

impl DomainCommon {
    pub fn new(instance: &StoreObject) -> Self {
        let attributes = &instance.attributes;
        let relations = &instance.relations;
        Self {
            created: attributes.created.clone(),
            modified: attributes.modified.clone(),
            revoked: attributes.revoked,
            confidence: attributes.confidence,
            lang: attributes.lang.clone(),
            labels: label_values(instance),
            object_marking_refs: refs(&relations.object_marking),
            created_by_ref: single_ref(&relations.created_by),
            external_references: external_references(instance),
        }
    }
}

/// Properties common to marking definitions.
///
/// Marking definitions have no modification semantics of their own: `modified` is the platform's last update time.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkingCommon {
    pub created_by_ref: Option<Identifier>,
    pub created: Option<Timestamp>,
    pub modified: Option<Timestamp>,
    pub external_references: Option<Vec<ExternalReference>>,
    pub object_marking_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain MarkingCommon {
    created_by_ref,
    created,
    modified,
    external_references,
    object_marking_refs,
});

impl MarkingCommon {
    pub fn new(instance: &StoreObject) -> Self {
        Self {
            created_by_ref: single_ref(&instance.relations.created_by),
            created: instance.attributes.created.clone(),
            modified: instance.attributes.updated_at.clone(),
            external_references: external_references(instance),
            object_marking_refs: refs(&instance.relations.object_marking),
        }
    }
}

/// Properties common to cyber-observables.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CyberObservableCommon {
    pub defanged: Option<bool>,
    pub object_marking_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain CyberObservableCommon { defanged, object_marking_refs });

impl CyberObservableCommon {
    pub fn new(instance: &StoreObject) -> Self {
        Self {
            defanged: instance.attributes.defanged,
            object_marking_refs: refs(&instance.relations.object_marking),
        }
    }
}

/// Platform context carried as top level properties by custom observables, in place of the cyber-observable extension.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomObservableContext {
    pub labels: Option<Vec<String>>,
    pub description: Option<String>,
    pub score: Option<i64>,
    pub created_by_ref: Option<Identifier>,
    pub external_references: Option<Vec<ExternalReference>>,
}

normalize_struct!(retain CustomObservableContext {
    labels,
    description,
    score,
    created_by_ref,
    external_references,
});

impl CustomObservableContext {
    pub fn new(instance: &StoreObject) -> Self {
        Self {
            labels: label_values(instance),
            description: instance.attributes.x_opencti_description.clone(),
            score: instance.attributes.x_opencti_score,
            created_by_ref: single_ref(&instance.relations.created_by),
            external_references: external_references(instance),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        base::{DomainCommon, Envelope, MarkingCommon},
        config::ConverterConfig,
        normalize::Normalize,
        store::StoreObject,
        types::Timestamp,
    };
    use serde_json::json;
    use test_log::test;

    fn malware() -> StoreObject {
        StoreObject::from_value(json!({
            "internal_id": "5a8e5f8e-2d2b-4a4b-9c52-3f0e3f0e3f0e",
            "standard_id": "malware--31b940d4-6f7f-459a-80ea-9c1f17b58abc",
            "entity_type": "Malware",
            "_index": "opencti_stix_domain_objects-000001",
            "created": "2022-03-14T09:10:11.123Z",
            "modified": "2022-03-15T09:10:11.123Z",
            "updated_at": "2022-04-01T08:00:00.456Z",
            "object-labels": [
                { "standard_id": "label--a4e0f9c9-1d1f-5c2a-9f8b-7d1b2c3d4e5f", "entity_type": "Label", "value": "ransomware" },
                { "standard_id": "label--b4e0f9c9-1d1f-5c2a-9f8b-7d1b2c3d4e5f", "entity_type": "Label", "value": "" }
            ],
            "object-marking": [
                { "standard_id": "marking-definition--613f2e26-407d-48c7-9eca-b8e91df99dc9", "entity_type": "Marking-Definition" }
            ],
            "external-references": [
                { "standard_id": "external-reference--1a2b3c4d-1d1f-5c2a-9f8b-7d1b2c3d4e5f", "entity_type": "External-Reference", "source_name": "mitre-attack", "external_id": "S0001" },
                { "standard_id": "external-reference--2a2b3c4d-1d1f-5c2a-9f8b-7d1b2c3d4e5f", "entity_type": "External-Reference" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn envelope_maps_type_and_id() {
        let envelope = Envelope::new(&malware(), &ConverterConfig::default());
        assert_eq!(envelope.object_type, "malware");
        assert_eq!(envelope.spec_version, "2.1");
        assert_eq!(
            envelope.id.to_string(),
            "malware--31b940d4-6f7f-459a-80ea-9c1f17b58abc"
        );
        assert!(envelope.extensions.cyber_observable.is_none());
    }

    #[test]
    fn domain_common_drops_empty_nested_values() {
        let common = DomainCommon::new(&malware()).normalize().unwrap();

        assert_eq!(common.labels, Some(vec!["ransomware".to_string()]));
        assert_eq!(common.object_marking_refs.as_ref().map(Vec::len), Some(1));
        assert_eq!(common.external_references.as_ref().map(Vec::len), Some(1));
        assert_eq!(common.created_by_ref, None);
    }

    #[test]
    fn marking_common_uses_update_time() {
        let common = MarkingCommon::new(&malware());
        assert_eq!(
            common.modified,
            Some(Timestamp::new("2022-04-01T08:00:00.456Z").unwrap())
        );
    }
}
