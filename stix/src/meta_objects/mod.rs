//! Data structures and functions for converting platform meta entities into STIX Meta Objects (SMOs).

pub mod marking_definition;
pub mod platform_objects;

use crate::{
    config::ConverterConfig,
    error::StixError as Error,
    meta_objects::{
        marking_definition::{convert_marking_definition, MarkingDefinition},
        platform_objects::{
            convert_external_reference, convert_kill_chain_phase, convert_label,
            ExternalReferenceObject, KillChainPhaseObject, Label,
        },
    },
    normalize::normalize_enum,
    object::StixObject,
    store::StoreObject,
    taxonomy::MetaType,
};
use serde::Serialize;
use strum::AsRefStr;

/// A STIX Meta Object (SMO) of some type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(untagged)]
#[strum(serialize_all = "kebab-case")]
pub enum MetaObject {
    MarkingDefinition(MarkingDefinition),
    Label(Label),
    KillChainPhase(KillChainPhaseObject),
    ExternalReference(ExternalReferenceObject),
}

normalize_enum!(MetaObject {
    MarkingDefinition,
    Label,
    KillChainPhase,
    ExternalReference,
});

/// Projects a meta object instance, according to its internal type
pub fn convert_meta_object(
    instance: &StoreObject,
    meta_type: MetaType,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    match meta_type {
        MetaType::MarkingDefinition => convert_marking_definition(instance, config),
        MetaType::Label => convert_label(instance, config),
        MetaType::KillChainPhase => convert_kill_chain_phase(instance, config),
        MetaType::ExternalReference => convert_external_reference(instance, config),
    }
}
