//! The extension namespaces attached to every converted object.
//!
//! Three property-extension blocks can be attached, each under its own extension definition id:
//! - the platform extension, carrying internal metadata, always present
//! - the cyber-observable extension, carrying the platform's observable-level context
//! - the MITRE extension, carrying ATT&CK specific properties
//!
//! Apart from the platform block, a block left with nothing but its `extension_type` is dropped during normalization.

use crate::{
    base::{external_references, label_values, refs, single_ref, KillChainPhase},
    config::ConverterConfig,
    normalize::{normalize_enum, normalize_field, normalize_struct, Normalize},
    store::StoreObject,
    types::{ExtensionType, Identifier, Timestamp},
};
use log::warn;
use ordered_float::OrderedFloat;
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::str::FromStr;

/// Extension definition id of the platform extension
pub const PLATFORM_EXTENSION_ID: &str =
    "extension-definition--ea279b3e-5c71-4632-ac08-831c66a786ba";
/// Extension definition id of the cyber-observable extension
pub const CYBER_OBSERVABLE_EXTENSION_ID: &str =
    "extension-definition--f93e2c80-4231-4f9a-af8b-95c9bd566a82";
/// Extension definition id of the MITRE extension
pub const MITRE_EXTENSION_ID: &str = "extension-definition--322b8f77-262a-4cb8-a915-1e441e00329b";

/// The `extensions` dictionary of a converted object.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Extensions {
    #[serde(rename = "extension-definition--ea279b3e-5c71-4632-ac08-831c66a786ba")]
    pub platform: PlatformExtension,
    #[serde(rename = "extension-definition--f93e2c80-4231-4f9a-af8b-95c9bd566a82")]
    pub cyber_observable: Option<CyberObservableExtension>,
    #[serde(rename = "extension-definition--322b8f77-262a-4cb8-a915-1e441e00329b")]
    pub mitre: Option<MitreExtension>,
}

impl Extensions {
    /// An extensions dictionary holding only the platform extension
    pub fn platform(platform: PlatformExtension) -> Self {
        Self {
            platform,
            cyber_observable: None,
            mitre: None,
        }
    }

    pub fn with_cyber_observable(mut self, extension: CyberObservableExtension) -> Self {
        self.cyber_observable = Some(extension);
        self
    }

    pub fn with_mitre(mut self, extension: MitreExtension) -> Self {
        self.mitre = Some(extension);
        self
    }

    /// Sets the discriminator of the platform extension
    pub fn with_platform_type(mut self, extension_type: ExtensionType) -> Self {
        self.platform.extension_type = extension_type;
        self
    }

    /// Adds type specific properties to the platform extension
    pub fn with_platform_extras(mut self, extras: PlatformExtras) -> Self {
        self.platform.extras = Some(extras);
        self
    }
}

impl Normalize for Extensions {
    // The platform extension is kept even when bare
    fn normalize(self) -> Option<Self> {
        let platform = self.platform.normalize()?;
        Some(Self {
            platform,
            cyber_observable: normalize_field(self.cyber_observable),
            mitre: normalize_field(self.mitre),
        })
    }
}

/// Whether a STIX id can be exposed to external consumers.
///
/// Ids embedding a version 1 UUID are generated by the platform and must not leak. Unparsable ids are never trusted.
pub fn is_trusted_stix_id(stix_id: &str) -> bool {
    Identifier::from_str(stix_id).is_ok_and(|id| id.is_trusted())
}

// Keeps the trusted ids, warning about the ones that cannot be parsed
fn trusted_stix_ids(stix_ids: &[String]) -> Vec<Identifier> {
    stix_ids
        .iter()
        .filter_map(|stix_id| match Identifier::from_str(stix_id) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Dropping platform stix id: {}", e);
                None
            }
        })
        .filter(Identifier::is_trusted)
        .collect()
}

/// Platform metadata attached to every converted object.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlatformExtension {
    pub extension_type: ExtensionType,
    /// Platform internal id
    pub id: Option<String>,
    /// Platform internal type
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub aliases: Option<Vec<String>>,
    pub files: Option<Vec<PlatformFile>>,
    /// Other STIX ids the object is known under, trusted ones only
    pub stix_ids: Option<Vec<Identifier>>,
    /// Whether the object was produced by an inference rule. Absent when the source index is unknown.
    pub is_inferred: Option<bool>,
    pub workflow_id: Option<String>,
    #[serde(flatten)]
    pub extras: Option<PlatformExtras>,
}

normalize_struct!(retain PlatformExtension {
    id,
    object_type,
    created_at,
    updated_at,
    aliases,
    files,
    stix_ids,
    is_inferred,
    workflow_id,
    extras,
});

impl PlatformExtension {
    /// Builds the platform extension of an instance
    pub fn new(instance: &StoreObject, config: &ConverterConfig) -> Self {
        let attributes = &instance.attributes;
        let files = attributes.x_opencti_files.as_ref().map(|files| {
            files
                .iter()
                .map(|file| PlatformFile {
                    name: file.name.clone(),
                    uri: config.file_uri(&file.id),
                    version: file.version.clone(),
                    mime_type: file.mime_type.clone(),
                })
                .collect()
        });

        Self {
            extension_type: ExtensionType::PropertyExtension,
            id: Some(instance.internal_id.clone()),
            object_type: Some(instance.entity_type.clone()),
            created_at: attributes.created_at.clone(),
            updated_at: attributes.updated_at.clone(),
            aliases: attributes.x_opencti_aliases.clone(),
            files,
            stix_ids: attributes
                .x_opencti_stix_ids
                .as_deref()
                .map(trusted_stix_ids),
            is_inferred: instance
                .index
                .as_deref()
                .filter(|index| !index.is_empty())
                .map(|index| config.is_inferred_index(index)),
            workflow_id: attributes.x_opencti_workflow_id.clone(),
            extras: None,
        }
    }
}

/// A file attached to an object, with the URI it can be retrieved from.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlatformFile {
    pub name: Option<String>,
    pub uri: String,
    pub version: Option<String>,
    pub mime_type: Option<String>,
}

normalize_struct!(retain PlatformFile { name, version, mime_type });

/// Type specific properties of the platform extension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlatformExtras {
    Identity(IdentityExtras),
    Vulnerability(VulnerabilityExtras),
    Indicator(IndicatorExtras),
    Relationship(RelationshipExtras),
    Sighting(SightingExtras),
    Marking(MarkingExtras),
}

normalize_enum!(PlatformExtras {
    Identity,
    Vulnerability,
    Indicator,
    Relationship,
    Sighting,
    Marking,
});

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdentityExtras {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub organization_type: Option<String>,
    pub reliability: Option<String>,
}

normalize_struct!(drop_empty IdentityExtras {
    firstname,
    lastname,
    organization_type,
    reliability,
});

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VulnerabilityExtras {
    pub attack_vector: Option<String>,
    pub availability_impact: Option<String>,
    pub base_score: Option<OrderedFloat<f64>>,
    pub base_severity: Option<String>,
    pub confidentiality_impact: Option<String>,
    pub integrity_impact: Option<String>,
}

normalize_struct!(drop_empty VulnerabilityExtras {
    attack_vector,
    availability_impact,
    base_score,
    base_severity,
    confidentiality_impact,
    integrity_impact,
});

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndicatorExtras {
    pub detection: Option<bool>,
    pub score: Option<i64>,
    pub main_observable_type: Option<String>,
}

normalize_struct!(drop_empty IndicatorExtras {
    detection,
    score,
    main_observable_type,
});

/// Internal view of the endpoints of a relationship
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelationshipExtras {
    /// Internal id of the source
    pub source_ref: Option<String>,
    /// Internal type of the source
    pub source_type: Option<String>,
    pub target_ref: Option<String>,
    pub target_type: Option<String>,
    pub kill_chain_phases: Option<Vec<KillChainPhase>>,
}

normalize_struct!(drop_empty RelationshipExtras {
    source_ref,
    source_type,
    target_ref,
    target_type,
    kill_chain_phases,
});

/// Internal view of what was sighted and where
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SightingExtras {
    pub sighting_of_ref: Option<String>,
    pub sighting_of_type: Option<String>,
    pub where_sighted_refs: Option<Vec<String>>,
    pub where_sighted_types: Option<Vec<String>>,
    pub negative: Option<bool>,
}

normalize_struct!(drop_empty SightingExtras {
    sighting_of_ref,
    sighting_of_type,
    where_sighted_refs,
    where_sighted_types,
    negative,
});

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkingExtras {
    pub order: Option<i64>,
    pub color: Option<String>,
}

normalize_struct!(drop_empty MarkingExtras { order, color });

/// Platform context attached to cyber-observables.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CyberObservableExtension {
    pub extension_type: ExtensionType,
    pub labels: Option<Vec<String>>,
    pub description: Option<String>,
    pub score: Option<i64>,
    pub created_by_ref: Option<Identifier>,
    pub linked_to_refs: Option<Vec<Identifier>>,
    pub external_references: Option<Vec<crate::base::ExternalReference>>,
    /// Alternative names of artifacts and files
    pub additional_names: Option<Vec<String>>,
}

normalize_struct!(drop_empty CyberObservableExtension {
    labels,
    description,
    score,
    created_by_ref,
    linked_to_refs,
    external_references,
    additional_names,
});

impl CyberObservableExtension {
    /// Builds the observable context of an instance
    pub fn new(instance: &StoreObject) -> Self {
        let relations = &instance.relations;
        Self {
            extension_type: ExtensionType::PropertyExtension,
            labels: label_values(instance),
            description: instance.attributes.x_opencti_description.clone(),
            score: instance.attributes.x_opencti_score,
            created_by_ref: single_ref(&relations.created_by),
            linked_to_refs: refs(&relations.linked_to),
            external_references: external_references(instance),
            additional_names: None,
        }
    }

    /// The bare block of custom observables, which carry their context as top level properties
    pub fn custom() -> Self {
        Self {
            extension_type: ExtensionType::NewSco,
            labels: None,
            description: None,
            score: None,
            created_by_ref: None,
            linked_to_refs: None,
            external_references: None,
            additional_names: None,
        }
    }

    pub fn with_additional_names(mut self, additional_names: Option<Vec<String>>) -> Self {
        self.additional_names = additional_names;
        self
    }
}

/// MITRE ATT&CK properties of attack patterns, courses of action and indicators.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MitreExtension {
    pub extension_type: ExtensionType,
    /// The ATT&CK id, e.g. `T1059`
    pub id: Option<String>,
    pub detection: Option<String>,
    pub permissions_required: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
}

normalize_struct!(drop_empty MitreExtension {
    id,
    detection,
    permissions_required,
    platforms,
});

impl MitreExtension {
    pub fn new(instance: &StoreObject) -> Self {
        let attributes = &instance.attributes;
        Self {
            extension_type: ExtensionType::PropertyExtension,
            id: attributes.x_mitre_id.clone(),
            detection: attributes.x_mitre_detection.clone(),
            permissions_required: attributes.x_mitre_permissions_required.clone(),
            platforms: attributes.x_mitre_platforms.clone(),
        }
    }
}
