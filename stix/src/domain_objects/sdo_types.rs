//! Data structures for the STIX Domain Object (SDO) types the platform converts.
//!
//! Each struct holds the properties specific to its type, on top of the [`DomainCommon`] layer.

use crate::{
    base::{DomainCommon, KillChainPhase},
    normalize::normalize_struct,
    types::{Identifier, Timestamp},
};
use ordered_float::OrderedFloat;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Attack Patterns are a type of TTP that describe ways that adversaries attempt to compromise targets.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_axjijf603msy>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttackPattern {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub aliases: Option<Vec<String>>,
    pub kill_chain_phases: Option<Vec<KillChainPhase>>,
}

normalize_struct!(retain AttackPattern with [common] {
    name,
    description,
    aliases,
    kill_chain_phases,
});

/// A Campaign is a grouping of adversarial behaviors that describes a set of malicious activities or attacks
/// that occur over a period of time against a specific set of targets.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_pcpvfz4ik6d6>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Campaign {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub aliases: Option<Vec<String>>,
    pub first_seen: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
    pub objective: Option<String>,
}

normalize_struct!(retain Campaign with [common] {
    name,
    description,
    aliases,
    first_seen,
    last_seen,
    objective,
});

/// A Course of Action is a recommendation from a producer of intelligence to a consumer on the actions that they might take in response to that intelligence.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_a925mpw39txn>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseOfAction {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
}

normalize_struct!(retain CourseOfAction with [common] { name, description });

/// Identities can represent actual individuals, organizations, or groups, as well as classes of individuals, organizations, systems or groups.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_wh296fiwpklp>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Identity {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub contact_information: Option<String>,
    pub identity_class: Option<String>,
    pub roles: Option<Vec<String>>,
    pub sectors: Option<Vec<String>>,
}

normalize_struct!(retain Identity with [common] {
    name,
    description,
    contact_information,
    identity_class,
    roles,
    sectors,
});

/// An Incident represents a security event the platform tracks as a new SDO type.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Incident {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub first_seen: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
    pub aliases: Option<Vec<String>>,
    pub objective: Option<String>,
}

normalize_struct!(retain Incident with [common] {
    name,
    description,
    first_seen,
    last_seen,
    aliases,
    objective,
});

/// Indicators contain a pattern that can be used to detect suspicious or malicious cyber activity.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_muftrcpnf89v>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Indicator {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub indicator_types: Option<Vec<String>>,
    pub pattern: Option<String>,
    pub pattern_type: Option<String>,
    pub pattern_version: Option<String>,
    pub valid_from: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
    pub kill_chain_phases: Option<Vec<KillChainPhase>>,
}

normalize_struct!(retain Indicator with [common] {
    name,
    description,
    indicator_types,
    pattern,
    pattern_type,
    pattern_version,
    valid_from,
    valid_until,
    kill_chain_phases,
});

/// Infrastructure represents a type of TTP and describes any systems, software services and any associated physical or virtual resources
/// intended to support some purpose.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_jo3k1o6lr9>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Infrastructure {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub infrastructure_types: Option<Vec<String>>,
    pub aliases: Option<Vec<String>>,
    pub kill_chain_phases: Option<Vec<KillChainPhase>>,
    pub first_seen: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
}

normalize_struct!(retain Infrastructure with [common] {
    name,
    description,
    infrastructure_types,
    aliases,
    kill_chain_phases,
    first_seen,
    last_seen,
});

/// An Intrusion Set is a grouped set of adversarial behaviors and resources with common properties that is believed to be orchestrated by a single organization.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_5ol9xlbbnrdn>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IntrusionSet {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub aliases: Option<Vec<String>>,
    pub first_seen: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
    pub goals: Option<Vec<String>>,
    pub resource_level: Option<String>,
    pub primary_motivation: Option<String>,
    pub secondary_motivations: Option<Vec<String>>,
}

normalize_struct!(retain IntrusionSet with [common] {
    name,
    description,
    aliases,
    first_seen,
    last_seen,
    goals,
    resource_level,
    primary_motivation,
    secondary_motivations,
});

/// A Location represents a geographic location.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_th8nitr8jb4k>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<OrderedFloat<f64>>,
    pub longitude: Option<OrderedFloat<f64>>,
    pub precision: Option<OrderedFloat<f64>>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub administrative_area: Option<String>,
    pub city: Option<String>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
}

normalize_struct!(retain Location with [common] {
    name,
    description,
    latitude,
    longitude,
    precision,
    region,
    country,
    administrative_area,
    city,
    street_address,
    postal_code,
});

/// Malware is a type of TTP that represents malicious code.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_s5l7katgbp09>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Malware {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub malware_types: Option<Vec<String>>,
    pub is_family: Option<bool>,
    pub aliases: Option<Vec<String>>,
    pub kill_chain_phases: Option<Vec<KillChainPhase>>,
    pub first_seen: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
    pub architecture_execution_envs: Option<Vec<String>>,
    pub implementation_languages: Option<Vec<String>>,
    pub capabilities: Option<Vec<String>>,
    pub operating_system_refs: Option<Vec<Identifier>>,
    pub sample_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain Malware with [common] {
    name,
    description,
    malware_types,
    is_family,
    aliases,
    kill_chain_phases,
    first_seen,
    last_seen,
    architecture_execution_envs,
    implementation_languages,
    capabilities,
    operating_system_refs,
    sample_refs,
});

/// A Note is intended to convey informative text to provide further context and/or to provide additional analysis not contained in the STIX Objects
/// that the Note relates to.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_gudodcg1sbb9>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Note {
    #[serde(flatten)]
    pub common: DomainCommon,
    /// A brief summary of the note content.
    #[serde(rename = "abstract")]
    pub note_abstract: Option<String>,
    pub content: Option<String>,
    pub authors: Option<Vec<String>>,
    pub object_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain Note with [common] {
    note_abstract,
    content,
    authors,
    object_refs,
});

/// Observed Data conveys information about cyber security related entities such as files, systems, and networks
/// using the STIX Cyber-observable Objects (SCOs).
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_p49j1fwoxldc>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ObservedData {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub first_observed: Option<Timestamp>,
    pub last_observed: Option<Timestamp>,
    pub number_observed: Option<u64>,
    pub object_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain ObservedData with [common] {
    first_observed,
    last_observed,
    number_observed,
    object_refs,
});

/// An Opinion is an assessment of the correctness of the information in a STIX Object produced by a different entity.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_ht1vtzfbtzda>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Opinion {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub explanation: Option<String>,
    pub authors: Option<Vec<String>>,
    pub opinion: Option<String>,
    pub object_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain Opinion with [common] {
    explanation,
    authors,
    opinion,
    object_refs,
});

/// Reports are collections of threat intelligence focused on one or more topics.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_n8bjzg1ysgdq>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub report_types: Option<Vec<String>>,
    pub published: Option<Timestamp>,
    pub object_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain Report with [common] {
    name,
    description,
    report_types,
    published,
    object_refs,
});

/// Threat Actors are actual individuals, groups, or organizations believed to be operating with malicious intent.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_k017w16zutw>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThreatActor {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub threat_actor_types: Option<Vec<String>>,
    pub aliases: Option<Vec<String>>,
    pub first_seen: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
    pub roles: Option<Vec<String>>,
    pub goals: Option<Vec<String>>,
    pub sophistication: Option<String>,
    pub resource_level: Option<String>,
    pub primary_motivation: Option<String>,
    pub secondary_motivations: Option<Vec<String>>,
    pub personal_motivations: Option<Vec<String>>,
}

normalize_struct!(retain ThreatActor with [common] {
    name,
    description,
    threat_actor_types,
    aliases,
    first_seen,
    last_seen,
    roles,
    goals,
    sophistication,
    resource_level,
    primary_motivation,
    secondary_motivations,
    personal_motivations,
});

/// Tools are legitimate software that can be used by threat actors to perform attacks.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_z4voa9ndw8v>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tool {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tool_types: Option<Vec<String>>,
    pub aliases: Option<Vec<String>>,
    pub kill_chain_phases: Option<Vec<KillChainPhase>>,
    pub tool_version: Option<String>,
}

normalize_struct!(retain Tool with [common] {
    name,
    description,
    tool_types,
    aliases,
    kill_chain_phases,
    tool_version,
});

/// A Vulnerability is a weakness or defect in the requirements, designs, or implementations of the computational logic found in software and some hardware components.
///
/// Scoring details are carried by the platform extension.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_q5ytzmajn6re>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Vulnerability {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub name: Option<String>,
    pub description: Option<String>,
}

normalize_struct!(retain Vulnerability with [common] { name, description });
