//! Defines the data structures for each specific STIX Relationship Object type.
use crate::{
    base::DomainCommon,
    normalize::normalize_struct,
    types::{Identifier, Timestamp},
};
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Relationship
///
/// The Relationship object is used to link together two SDOs or SCOs in order to describe how they are related to
/// each other. Relationships between observables and meta relationships are projected the same way.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_e2e1szrqfoan>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Relationship {
    #[serde(flatten)]
    pub common: DomainCommon,
    /// The name used to identify the type of Relationship.
    pub relationship_type: Option<String>,
    /// Provides more details and context about the Relationship, potentially including its purpose and its key characteristics.
    pub description: Option<String>,
    /// The id of the source (from) object.
    pub source_ref: Option<Identifier>,
    /// The id of the target (to) object.
    pub target_ref: Option<Identifier>,
    pub start_time: Option<Timestamp>,
    pub stop_time: Option<Timestamp>,
}

normalize_struct!(retain Relationship with [common] {
    relationship_type,
    description,
    source_ref,
    target_ref,
    start_time,
    stop_time,
});

/// Sighting
///
/// A Sighting denotes the belief that something in CTI (e.g., an indicator, malware, tool, threat actor, etc.) was seen.
///
/// The observed data backing a sighting is not tracked, so `observed_data_refs` is never emitted.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_a795guqsap3r>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sighting {
    #[serde(flatten)]
    pub common: DomainCommon,
    pub description: Option<String>,
    pub first_seen: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
    pub count: Option<u64>,
    /// An ID reference to the SDO that was sighted.
    pub sighting_of_ref: Option<Identifier>,
    /// A list of ID references to the Identity or Location objects describing the entities or types of entities that
    /// saw the sighting.
    pub where_sighted_refs: Option<Vec<Identifier>>,
    pub summary: Option<bool>,
}

normalize_struct!(retain Sighting with [common] {
    description,
    first_seen,
    last_seen,
    count,
    sighting_of_ref,
    where_sighted_refs,
    summary,
});
