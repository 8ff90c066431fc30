//! Data structures and functions for converting platform relations into STIX Relationship Objects (SROs).
//!
//! Relations are converted from their resolved endpoints: an endpoint that the hydration layer did not resolve makes
//! the relation unconvertible.

pub mod types;
mod tests;

use crate::{
    base::{assert_type, kill_chain_phases, DomainCommon, Envelope},
    config::ConverterConfig,
    error::StixError as Error,
    extensions::{PlatformExtras, RelationshipExtras, SightingExtras},
    normalize::normalize_enum,
    object::{StixObject, StixProperties},
    relationship_objects::types::{Relationship, Sighting},
    store::{single, StoreObject},
    taxonomy::{is_stix_relationship, is_stix_sighting_relationship, STIX_SIGHTING_RELATIONSHIP},
};
use serde::Serialize;
use strum::AsRefStr;

/// A STIX Relationship Object (SRO): either a generic relationship or a sighting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(untagged)]
#[strum(serialize_all = "kebab-case")]
pub enum RelationshipObject {
    Relationship(Relationship),
    Sighting(Sighting),
}

normalize_enum!(RelationshipObject {
    Relationship,
    Sighting,
});

impl RelationshipObject {
    /// Returns the relationship type for generic SROs or "sighting" if the SRO is a Sighting
    pub fn get_relationship_type(&self) -> &str {
        match self {
            RelationshipObject::Relationship(relationship) => {
                relationship.relationship_type.as_deref().unwrap_or_default()
            }
            RelationshipObject::Sighting(_) => "sighting",
        }
    }
}

/// Checks that both endpoints of a relation are resolved, `from` first, and returns them.
///
/// An absent slot and an empty list are both unresolved.
pub fn check_instance_completion(
    instance: &StoreObject,
) -> Result<(&StoreObject, &StoreObject), Error> {
    let from = single(&instance.relations.from).ok_or_else(|| Error::UnresolvedRelation {
        endpoint: "from".to_string(),
        id: instance.from_id.clone().unwrap_or_default(),
    })?;
    let to = single(&instance.relations.to).ok_or_else(|| Error::UnresolvedRelation {
        endpoint: "to".to_string(),
        id: instance.to_id.clone().unwrap_or_default(),
    })?;
    Ok((from, to))
}

/// Converts a core, cyber-observable or meta relation into a `relationship`
pub fn convert_relationship(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    if !is_stix_relationship(&instance.entity_type)
        || is_stix_sighting_relationship(&instance.entity_type)
    {
        return Err(Error::IncompatibleType {
            instance_type: instance.entity_type.clone(),
            expected: "relationship".to_string(),
        });
    }
    let (from, to) = check_instance_completion(instance)?;
    let attributes = &instance.attributes;

    let envelope = Envelope::new(instance, config).map_extensions(|extensions| {
        extensions.with_platform_extras(PlatformExtras::Relationship(RelationshipExtras {
            source_ref: Some(from.internal_id.clone()),
            source_type: Some(from.entity_type.clone()),
            target_ref: Some(to.internal_id.clone()),
            target_type: Some(to.entity_type.clone()),
            kill_chain_phases: kill_chain_phases(instance),
        }))
    });

    let relationship = Relationship {
        common: DomainCommon::new(instance),
        relationship_type: attributes
            .relationship_type
            .clone()
            .or_else(|| Some(instance.entity_type.clone())),
        description: attributes.description.clone(),
        source_ref: Some(from.standard_id.clone()),
        target_ref: Some(to.standard_id.clone()),
        start_time: attributes.start_time.clone(),
        stop_time: attributes.stop_time.clone(),
    };
    Ok(StixObject::new(
        envelope,
        StixProperties::Sro(RelationshipObject::Relationship(relationship)),
    ))
}

/// Converts a sighting relation: the `from` endpoint was sighted, at the `to` endpoint
pub fn convert_sighting(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, STIX_SIGHTING_RELATIONSHIP)?;
    let (from, to) = check_instance_completion(instance)?;
    let attributes = &instance.attributes;

    let envelope = Envelope::new(instance, config).map_extensions(|extensions| {
        extensions.with_platform_extras(PlatformExtras::Sighting(SightingExtras {
            sighting_of_ref: Some(from.internal_id.clone()),
            sighting_of_type: Some(from.entity_type.clone()),
            where_sighted_refs: Some(vec![to.internal_id.clone()]),
            where_sighted_types: Some(vec![to.entity_type.clone()]),
            negative: attributes.x_opencti_negative,
        }))
    });

    let sighting = Sighting {
        common: DomainCommon::new(instance),
        description: attributes.description.clone(),
        first_seen: attributes.first_seen.clone(),
        last_seen: attributes.last_seen.clone(),
        count: attributes.attribute_count,
        sighting_of_ref: Some(from.standard_id.clone()),
        where_sighted_refs: Some(vec![to.standard_id.clone()]),
        summary: attributes.summary,
    };
    Ok(StixObject::new(
        envelope,
        StixProperties::Sro(RelationshipObject::Sighting(sighting)),
    ))
}
