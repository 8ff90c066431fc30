//! Data structures and functions for converting markings into Marking Definition SMOs

use crate::{
    base::{assert_type, Envelope, MarkingCommon},
    config::ConverterConfig,
    error::StixError as Error,
    extensions::{MarkingExtras, PlatformExtras},
    meta_objects::MetaObject,
    normalize::normalize_struct,
    object::{StixObject, StixProperties},
    store::StoreObject,
    taxonomy::MetaType,
};
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Type Name: marking-definition
/// The marking-definition object represents a specific marking. Data markings typically represent
/// handling or sharing requirements for data and are applied in the object_marking_refs property on STIX Objects.
///
/// Markings are not versioned: their `modified` property is the last time the platform updated them.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkingDefinition {
    #[serde(flatten)]
    pub common: MarkingCommon,
    /// A name used to identify the Marking Definition, e.g. `TLP:GREEN`.
    pub name: Option<String>,
    /// The definition_type property identifies the type of Marking Definition.
    pub definition_type: Option<String>,
}

normalize_struct!(retain MarkingDefinition with [common] { name, definition_type });

/// Converts a marking, with its display order and color in the platform extension
pub fn convert_marking_definition(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, MetaType::MarkingDefinition)?;
    let attributes = &instance.attributes;
    let envelope = Envelope::new(instance, config).map_extensions(|extensions| {
        extensions.with_platform_extras(PlatformExtras::Marking(MarkingExtras {
            order: attributes.x_opencti_order,
            color: attributes.x_opencti_color.clone(),
        }))
    });

    let marking = MarkingDefinition {
        common: MarkingCommon::new(instance),
        name: attributes.definition.clone(),
        definition_type: attributes.definition_type.clone(),
    };
    Ok(StixObject::new(
        envelope,
        StixProperties::Smo(MetaObject::MarkingDefinition(marking)),
    ))
}
