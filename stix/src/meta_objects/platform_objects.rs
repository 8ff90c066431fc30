//! Labels, kill chain phases and external references.
//!
//! These are embedded as plain values in the objects they apply to, but the platform also exchanges them as
//! standalone objects. Having no STIX 2.1 object type, they declare a new SDO in their platform extension.

use crate::{
    base::{assert_type, Envelope},
    config::ConverterConfig,
    error::StixError as Error,
    meta_objects::MetaObject,
    normalize::normalize_struct,
    object::{StixObject, StixProperties},
    store::StoreObject,
    taxonomy::MetaType,
    types::{ExtensionType, Hashes},
};
use serde::Serialize;
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Label {
    pub value: Option<String>,
    pub color: Option<String>,
}

normalize_struct!(retain Label { value, color });

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KillChainPhaseObject {
    pub kill_chain_name: Option<String>,
    pub phase_name: Option<String>,
    /// Position of the phase in its kill chain
    pub order: Option<i64>,
}

normalize_struct!(retain KillChainPhaseObject { kill_chain_name, phase_name, order });

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExternalReferenceObject {
    pub source_name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Always emitted, even when no hash is known
    pub hashes: Option<Hashes>,
    pub external_id: Option<String>,
}

normalize_struct!(retain ExternalReferenceObject {
    source_name,
    description,
    url,
    hashes,
    external_id,
});

fn new_sdo_envelope(instance: &StoreObject, config: &ConverterConfig) -> Envelope {
    Envelope::new(instance, config)
        .map_extensions(|extensions| extensions.with_platform_type(ExtensionType::NewSdo))
}

fn meta_object(envelope: Envelope, object: MetaObject) -> StixObject {
    StixObject::new(envelope, StixProperties::Smo(object))
}

pub fn convert_label(instance: &StoreObject, config: &ConverterConfig) -> Result<StixObject, Error> {
    assert_type(instance, MetaType::Label)?;
    let label = Label {
        value: instance.attributes.value.clone(),
        color: instance.attributes.color.clone(),
    };
    Ok(meta_object(
        new_sdo_envelope(instance, config),
        MetaObject::Label(label),
    ))
}

pub fn convert_kill_chain_phase(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, MetaType::KillChainPhase)?;
    let attributes = &instance.attributes;
    let kill_chain_phase = KillChainPhaseObject {
        kill_chain_name: attributes.kill_chain_name.clone(),
        phase_name: attributes.phase_name.clone(),
        order: attributes.x_opencti_order,
    };
    Ok(meta_object(
        new_sdo_envelope(instance, config),
        MetaObject::KillChainPhase(kill_chain_phase),
    ))
}

pub fn convert_external_reference(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, MetaType::ExternalReference)?;
    let attributes = &instance.attributes;
    let external_reference = ExternalReferenceObject {
        source_name: attributes.source_name.clone(),
        description: attributes.description.clone(),
        url: attributes.url.clone(),
        hashes: Some(attributes.hashes.clone().unwrap_or_default()),
        external_id: attributes.external_id.clone(),
    };
    Ok(meta_object(
        new_sdo_envelope(instance, config),
        MetaObject::ExternalReference(external_reference),
    ))
}
