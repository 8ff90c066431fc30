//! Top level STIX object structure, and the entry point converting a hydrated platform instance into it.
use crate::{
    base::Envelope,
    config::ConverterConfig,
    cyber_observable_objects::sco::{convert_cyber_observable, CyberObject},
    domain_objects::sdo::{convert_domain_object, DomainObject},
    error::StixError as Error,
    extensions::Extensions,
    json,
    meta_objects::{convert_meta_object, MetaObject},
    normalize::{normalize_enum, normalize_struct, Normalize},
    relationship_objects::{convert_relationship, convert_sighting, RelationshipObject},
    store::StoreObject,
    taxonomy::{classify, StixCategory},
    types::Identifier,
};
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use strum::AsRefStr;

/// A converted STIX 2.1 object.
///
/// Holds the properties found on every object, the properties specific to its type, and its extensions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StixObject {
    pub id: Identifier,
    pub spec_version: String,
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(flatten)]
    pub properties: StixProperties,
    pub extensions: Extensions,
}

normalize_struct!(retain StixObject with [properties, extensions] {});

impl StixObject {
    /// Assembles an object from its envelope and its type specific properties
    pub fn new(envelope: Envelope, properties: StixProperties) -> Self {
        Self {
            id: envelope.id,
            spec_version: envelope.spec_version,
            object_type: envelope.object_type,
            properties,
            extensions: envelope.extensions,
        }
    }

    /// Get the id of the STIX Object
    pub fn get_id(&self) -> &Identifier {
        &self.id
    }

    /// Get the specific type of the STIX Object, e.g. `indicator` or `ipv4-addr`
    pub fn get_type(&self) -> &str {
        &self.object_type
    }

    /// Get the category of the STIX Object: `sdo`, `sco`, `sro` or `smo`
    pub fn get_object_type(&self) -> &str {
        self.properties.as_ref()
    }

    /// Serializes the object to a compact JSON String
    pub fn to_json(&self) -> Result<String, Error> {
        json::to_json(self)
    }

    /// Serializes the object to an indented JSON String
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        json::to_json_pretty(self)
    }

    /// Serializes the object to a JSON value
    pub fn to_value(&self) -> Result<Value, Error> {
        json::to_value(self)
    }
}

/// The type specific properties of a converted object, by category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(untagged)]
pub enum StixProperties {
    #[strum(serialize = "sdo")]
    Sdo(DomainObject),
    #[strum(serialize = "sco")]
    Sco(CyberObject),
    #[strum(serialize = "sro")]
    Sro(RelationshipObject),
    #[strum(serialize = "smo")]
    Smo(MetaObject),
}

normalize_enum!(StixProperties { Sdo, Sco, Sro, Smo });

/// Converts hydrated platform instances into STIX 2.1 objects.
///
/// A converter holds no state besides its configuration, and can be shared between threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StixConverter {
    config: ConverterConfig,
}

impl StixConverter {
    /// Creates a converter, checking its configuration first
    pub fn new(config: ConverterConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts a fully loaded instance into a STIX object with every empty field removed.
    ///
    /// Conversion is all or nothing: any error aborts it and no partial object is returned.
    pub fn convert(&self, instance: &StoreObject) -> Result<StixObject, Error> {
        let has_index = matches!(instance.index.as_deref(), Some(index) if !index.is_empty());
        if !has_index || instance.entity_type.is_empty() {
            warn!(
                "Cannot convert {}: instance is not fully loaded",
                instance.standard_id
            );
            return Err(Error::IncompleteInstance);
        }

        let converted = self.convert_to_stix(instance).inspect_err(|e| {
            warn!("Cannot convert {}: {}", instance.standard_id, e);
        })?;

        let stix = converted
            .normalize()
            .filter(is_valid_stix)
            .ok_or_else(|| Error::InvalidConversion(instance.standard_id.to_string()))?;
        Ok(stix)
    }

    // Routes the instance to the projector of its category and type
    fn convert_to_stix(&self, instance: &StoreObject) -> Result<StixObject, Error> {
        let category = classify(&instance.entity_type).ok_or_else(|| Error::unsupported(instance))?;
        debug!(
            "Converting {} of type {} as {:?}",
            instance.standard_id, instance.entity_type, category
        );

        match category {
            StixCategory::DomainObject(domain_type) => {
                convert_domain_object(instance, domain_type, &self.config)
            }
            StixCategory::CyberObservable(observable_type) => {
                convert_cyber_observable(instance, observable_type, &self.config)
            }
            StixCategory::MetaObject(meta_type) => {
                convert_meta_object(instance, meta_type, &self.config)
            }
            StixCategory::CoreRelationship(_)
            | StixCategory::CyberObservableRelationship(_)
            | StixCategory::MetaRelationship(_) => convert_relationship(instance, &self.config),
            StixCategory::SightingRelationship => convert_sighting(instance, &self.config),
        }
    }
}

// Sanity check on a normalized object
fn is_valid_stix(stix: &StixObject) -> bool {
    !stix.object_type.is_empty() && !stix.id.get_type().is_empty() && !stix.spec_version.is_empty()
}

/// Converts a fully loaded instance with the default configuration.
pub fn convert_store_to_stix(instance: &StoreObject) -> Result<StixObject, Error> {
    StixConverter::default().convert(instance)
}

#[cfg(test)]
mod tests {
    use crate::{
        config::ConverterConfig,
        error::StixError,
        fixtures::store_object,
        object::{convert_store_to_stix, StixConverter},
    };
    use serde_json::json;
    use test_log::test;

    #[test]
    fn converter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StixConverter>();
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let config = ConverterConfig {
            storage_uri_prefix: "storage".to_string(),
            ..ConverterConfig::default()
        };
        assert!(StixConverter::new(config).is_err());
    }

    #[test]
    fn unknown_type_is_unsupported() {
        let instance = store_object(
            "Grouping",
            "grouping--84e4d88f-44ea-4bcd-bbf3-b2c1c320bcb3",
            json!({}),
        );

        let error = convert_store_to_stix(&instance).unwrap_err();
        assert!(error.is_unsupported());
        assert_eq!(error.to_string(), "Type Grouping cannot be converted to Stix");
        match error {
            StixError::UnsupportedType { entity_type, instance } => {
                assert_eq!(entity_type, "Grouping");
                assert!(instance.is_some());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn instance_without_index_is_incomplete() {
        let mut instance = store_object(
            "Malware",
            "malware--31b940d4-6f7f-459a-80ea-9c1f17b58abc",
            json!({ "name": "Emotet" }),
        );
        instance.index = None;
        assert!(matches!(
            convert_store_to_stix(&instance),
            Err(StixError::IncompleteInstance)
        ));

        instance.index = Some(String::new());
        assert!(matches!(
            convert_store_to_stix(&instance),
            Err(StixError::IncompleteInstance)
        ));
    }

    #[test]
    fn instance_without_type_is_incomplete() {
        let mut instance = store_object(
            "Malware",
            "malware--31b940d4-6f7f-459a-80ea-9c1f17b58abc",
            json!({}),
        );
        instance.entity_type = String::new();
        assert!(matches!(
            convert_store_to_stix(&instance),
            Err(StixError::IncompleteInstance)
        ));
    }

    #[test]
    fn object_category_and_type() {
        let instance = store_object(
            "Malware",
            "malware--31b940d4-6f7f-459a-80ea-9c1f17b58abc",
            json!({ "name": "Emotet" }),
        );

        let stix = convert_store_to_stix(&instance).unwrap();
        assert_eq!(stix.get_object_type(), "sdo");
        assert_eq!(stix.get_type(), "malware");
        assert_eq!(
            stix.get_id().to_string(),
            "malware--31b940d4-6f7f-459a-80ea-9c1f17b58abc"
        );

        let value = stix.to_value().unwrap();
        assert_eq!(value["type"], "malware");
        assert_eq!(value["spec_version"], "2.1");
        assert_eq!(value["name"], "Emotet");
    }
}
