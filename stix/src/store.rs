//! The hydrated platform entity handed over by the storage layer.
//!
//! A `StoreObject` is a snapshot of a node or an edge of the graph store, with every relation
//! the converter may need already resolved and attached under its relation key. The converter
//! never queries for missing relations: an absent slot simply means "no relation".

use crate::{
    error::StixError as Error,
    types::{Hashes, Identifier, StixDictionary, Timestamp},
};
use ordered_float::OrderedFloat;
use serde::Deserialize;
use serde_this_or_that::{as_opt_i64, as_opt_u64};

/// A hydrated entity or relation of the graph store.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StoreObject {
    /// Platform internal identifier
    #[serde(default)]
    pub internal_id: String,
    /// Spec-stable identifier, used as the STIX `id`
    pub standard_id: Identifier,
    /// Internal type identifier, e.g. `Threat-Actor` or `IPv4-Addr`
    #[serde(default)]
    pub entity_type: String,
    /// Storage index the instance was read from
    #[serde(rename = "_index")]
    pub index: Option<String>,
    /// Internal id of the source of a relation
    #[serde(rename = "fromId")]
    pub from_id: Option<String>,
    /// Internal id of the target of a relation
    #[serde(rename = "toId")]
    pub to_id: Option<String>,
    #[serde(flatten)]
    pub attributes: StoreAttributes,
    #[serde(flatten)]
    pub relations: Relations,
}

impl StoreObject {
    /// Deserializes a hydrated instance from a JSON String.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::DeserializationError(e.to_string()))
    }

    /// Deserializes a hydrated instance from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(|e| Error::DeserializationError(e.to_string()))
    }
}

/// A file attached to an instance.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StoreFile {
    /// Internal file id, the key of the file in the platform storage
    pub id: String,
    pub name: Option<String>,
    pub version: Option<String>,
    pub mime_type: Option<String>,
}

/// Attributes of an instance, as stored. Every attribute is optional: projectors read the
/// ones relevant to their type and ignore the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StoreAttributes {
    // Platform metadata
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub x_opencti_aliases: Option<Vec<String>>,
    pub x_opencti_files: Option<Vec<StoreFile>>,
    pub x_opencti_stix_ids: Option<Vec<String>>,
    pub x_opencti_workflow_id: Option<String>,
    // Common domain properties
    pub created: Option<Timestamp>,
    pub modified: Option<Timestamp>,
    pub revoked: Option<bool>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub confidence: Option<u64>,
    pub lang: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub aliases: Option<Vec<String>>,
    pub first_seen: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
    pub objective: Option<String>,
    pub roles: Option<Vec<String>>,
    pub goals: Option<Vec<String>>,
    pub resource_level: Option<String>,
    pub primary_motivation: Option<String>,
    pub secondary_motivations: Option<Vec<String>>,
    // Identity
    pub contact_information: Option<String>,
    pub identity_class: Option<String>,
    pub sectors: Option<Vec<String>>,
    pub x_opencti_firstname: Option<String>,
    pub x_opencti_lastname: Option<String>,
    pub x_opencti_organization_type: Option<String>,
    pub x_opencti_reliability: Option<String>,
    // Location
    pub latitude: Option<OrderedFloat<f64>>,
    pub longitude: Option<OrderedFloat<f64>>,
    pub precision: Option<OrderedFloat<f64>>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub administrative_area: Option<String>,
    pub city: Option<String>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    // Tool, malware, infrastructure, threat actor
    pub tool_types: Option<Vec<String>>,
    pub tool_version: Option<String>,
    pub threat_actor_types: Option<Vec<String>>,
    pub sophistication: Option<String>,
    pub personal_motivations: Option<Vec<String>>,
    pub infrastructure_types: Option<Vec<String>>,
    pub malware_types: Option<Vec<String>>,
    pub is_family: Option<bool>,
    pub architecture_execution_envs: Option<Vec<String>>,
    pub implementation_languages: Option<Vec<String>>,
    pub capabilities: Option<Vec<String>>,
    // Vulnerability
    pub x_opencti_attack_vector: Option<String>,
    pub x_opencti_availability_impact: Option<String>,
    pub x_opencti_base_score: Option<OrderedFloat<f64>>,
    pub x_opencti_base_severity: Option<String>,
    pub x_opencti_confidentiality_impact: Option<String>,
    pub x_opencti_integrity_impact: Option<String>,
    // Indicator
    pub indicator_types: Option<Vec<String>>,
    pub pattern: Option<String>,
    pub pattern_type: Option<String>,
    pub pattern_version: Option<String>,
    pub valid_from: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
    pub x_opencti_detection: Option<bool>,
    #[serde(default, deserialize_with = "as_opt_i64")]
    pub x_opencti_score: Option<i64>,
    pub x_opencti_main_observable_type: Option<String>,
    // MITRE
    pub x_mitre_id: Option<String>,
    pub x_mitre_detection: Option<String>,
    pub x_mitre_permissions_required: Option<Vec<String>>,
    pub x_mitre_platforms: Option<Vec<String>>,
    // Containers
    pub report_types: Option<Vec<String>>,
    pub published: Option<Timestamp>,
    pub attribute_abstract: Option<String>,
    pub content: Option<String>,
    pub authors: Option<Vec<String>>,
    pub first_observed: Option<Timestamp>,
    pub last_observed: Option<Timestamp>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub number_observed: Option<u64>,
    pub explanation: Option<String>,
    pub opinion: Option<String>,
    // Meta objects
    pub definition: Option<String>,
    pub definition_type: Option<String>,
    #[serde(default, deserialize_with = "as_opt_i64")]
    pub x_opencti_order: Option<i64>,
    pub x_opencti_color: Option<String>,
    pub value: Option<String>,
    pub color: Option<String>,
    pub kill_chain_name: Option<String>,
    pub phase_name: Option<String>,
    pub source_name: Option<String>,
    pub url: Option<String>,
    pub hashes: Option<Hashes>,
    pub external_id: Option<String>,
    // Common observable properties
    pub defanged: Option<bool>,
    pub x_opencti_description: Option<String>,
    pub x_opencti_additional_names: Option<Vec<String>>,
    // Artifact, file, directory
    pub mime_type: Option<String>,
    pub payload_bin: Option<String>,
    pub encryption_algorithm: Option<String>,
    pub decryption_key: Option<String>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub size: Option<u64>,
    pub name_enc: Option<String>,
    pub magic_number_hex: Option<String>,
    pub ctime: Option<Timestamp>,
    pub mtime: Option<Timestamp>,
    pub atime: Option<Timestamp>,
    pub path: Option<String>,
    pub path_enc: Option<String>,
    // Autonomous system
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub number: Option<u64>,
    pub rir: Option<String>,
    // Email
    pub display_name: Option<String>,
    pub is_multipart: Option<bool>,
    pub attribute_date: Option<Timestamp>,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub message_id: Option<String>,
    pub subject: Option<String>,
    pub received_lines: Option<Vec<String>>,
    pub body: Option<String>,
    // Network traffic
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub src_port: Option<u64>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub dst_port: Option<u64>,
    pub protocols: Option<Vec<String>>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub src_byte_count: Option<u64>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub dst_byte_count: Option<u64>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub src_packets: Option<u64>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub dst_packets: Option<u64>,
    pub ipfix: Option<StixDictionary>,
    // Process
    pub is_hidden: Option<bool>,
    #[serde(default, deserialize_with = "as_opt_i64")]
    pub pid: Option<i64>,
    pub created_time: Option<Timestamp>,
    pub cwd: Option<String>,
    pub command_line: Option<String>,
    pub environment_variables: Option<StixDictionary>,
    // Software
    pub cpe: Option<String>,
    pub swid: Option<String>,
    pub languages: Option<Vec<String>>,
    pub vendor: Option<String>,
    pub version: Option<String>,
    // User account
    pub user_id: Option<String>,
    pub credential: Option<String>,
    pub account_login: Option<String>,
    pub account_type: Option<String>,
    pub is_service_account: Option<bool>,
    pub is_privileged: Option<bool>,
    pub can_escalate_privs: Option<bool>,
    pub is_disabled: Option<bool>,
    pub account_created: Option<Timestamp>,
    pub account_expires: Option<Timestamp>,
    pub credential_last_changed: Option<Timestamp>,
    pub account_first_login: Option<Timestamp>,
    pub account_last_login: Option<Timestamp>,
    // Windows registry
    pub attribute_key: Option<String>,
    pub modified_time: Option<Timestamp>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub number_of_subkeys: Option<u64>,
    pub data: Option<String>,
    pub data_type: Option<String>,
    // X.509 certificate
    pub is_self_signed: Option<bool>,
    pub serial_number: Option<String>,
    pub signature_algorithm: Option<String>,
    pub issuer: Option<String>,
    pub validity_not_before: Option<Timestamp>,
    pub validity_not_after: Option<Timestamp>,
    pub subject_public_key_algorithm: Option<String>,
    pub subject_public_key_modulus: Option<String>,
    #[serde(default, deserialize_with = "as_opt_i64")]
    pub subject_public_key_exponent: Option<i64>,
    pub basic_constraints: Option<String>,
    pub name_constraints: Option<String>,
    pub policy_constraints: Option<String>,
    pub key_usage: Option<String>,
    pub extended_key_usage: Option<String>,
    pub subject_key_identifier: Option<String>,
    pub authority_key_identifier: Option<String>,
    pub subject_alternative_name: Option<String>,
    pub issuer_alternative_name: Option<String>,
    pub subject_directory_attributes: Option<String>,
    pub crl_distribution_points: Option<String>,
    pub inhibit_any_policy: Option<String>,
    pub private_key_usage_period_not_before: Option<Timestamp>,
    pub private_key_usage_period_not_after: Option<Timestamp>,
    pub certificate_policies: Option<String>,
    pub policy_mappings: Option<String>,
    // Relationships and sightings
    pub relationship_type: Option<String>,
    pub start_time: Option<Timestamp>,
    pub stop_time: Option<Timestamp>,
    #[serde(default, deserialize_with = "as_opt_u64")]
    pub attribute_count: Option<u64>,
    pub summary: Option<bool>,
    pub x_opencti_negative: Option<bool>,
}

/// A relation slot filled by the hydration layer: either one resolved record or an ordered list of them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Resolved {
    Single(Box<StoreObject>),
    List(Vec<StoreObject>),
}

impl Resolved {
    /// The single resolved record, or the first one of a list
    pub fn single(&self) -> Option<&StoreObject> {
        match self {
            Resolved::Single(object) => Some(object),
            Resolved::List(objects) => objects.first(),
        }
    }

    /// Every resolved record, in order
    pub fn all(&self) -> &[StoreObject] {
        match self {
            Resolved::Single(object) => std::slice::from_ref(object.as_ref()),
            Resolved::List(objects) => objects,
        }
    }
}

/// Resolves an optional slot to its first record
pub fn single(slot: &Option<Resolved>) -> Option<&StoreObject> {
    slot.as_ref().and_then(Resolved::single)
}

/// Resolves an optional slot to all of its records, empty when the slot is absent
pub fn all(slot: &Option<Resolved>) -> &[StoreObject] {
    slot.as_ref().map(Resolved::all).unwrap_or_default()
}

/// The resolved relations of an instance, one named slot per relation key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Relations {
    // Common meta relations
    #[serde(rename = "created-by")]
    pub created_by: Option<Resolved>,
    #[serde(rename = "object-marking")]
    pub object_marking: Option<Resolved>,
    #[serde(rename = "object-labels")]
    pub object_labels: Option<Resolved>,
    #[serde(rename = "external-references")]
    pub external_references: Option<Resolved>,
    #[serde(rename = "kill-chain-phases")]
    pub kill_chain_phases: Option<Resolved>,
    pub objects: Option<Resolved>,
    #[serde(rename = "linked-to")]
    pub linked_to: Option<Resolved>,
    // Domain object specific relations
    #[serde(rename = "operating-system")]
    pub operating_system: Option<Resolved>,
    pub sample: Option<Resolved>,
    // Relation endpoints, also used as the email `from` / `to` addresses
    pub from: Option<Resolved>,
    pub to: Option<Resolved>,
    // Observable specific relations
    pub contains: Option<Resolved>,
    #[serde(rename = "resolves-to")]
    pub resolves_to: Option<Resolved>,
    #[serde(rename = "belongs-to")]
    pub belongs_to: Option<Resolved>,
    pub sender: Option<Resolved>,
    pub cc: Option<Resolved>,
    pub bcc: Option<Resolved>,
    #[serde(rename = "raw-email")]
    pub raw_email: Option<Resolved>,
    #[serde(rename = "body-raw")]
    pub body_raw: Option<Resolved>,
    #[serde(rename = "body-multipart")]
    pub body_multipart: Option<Resolved>,
    #[serde(rename = "parent-directory")]
    pub parent_directory: Option<Resolved>,
    #[serde(rename = "obs-content")]
    pub obs_content: Option<Resolved>,
    pub src: Option<Resolved>,
    pub dst: Option<Resolved>,
    #[serde(rename = "src-payload")]
    pub src_payload: Option<Resolved>,
    #[serde(rename = "dst-payload")]
    pub dst_payload: Option<Resolved>,
    pub encapsulates: Option<Resolved>,
    #[serde(rename = "encapsulated-by")]
    pub encapsulated_by: Option<Resolved>,
    #[serde(rename = "opened-connection")]
    pub opened_connection: Option<Resolved>,
    #[serde(rename = "creator-user")]
    pub creator_user: Option<Resolved>,
    pub image: Option<Resolved>,
    pub parent: Option<Resolved>,
    pub child: Option<Resolved>,
    pub values: Option<Resolved>,
}
