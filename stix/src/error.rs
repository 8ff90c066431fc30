//! A custom STIX conversion Error type, with its associated functions.
use jiff::Error as JiffError;
use thiserror::Error;

use crate::store::StoreObject;

/// Custom Error type for the STIX converter
#[derive(Debug, Clone, Error)]
pub enum StixError {
    // Unsupported family: the instance cannot be converted as given
    #[error("Type {entity_type} cannot be converted to Stix")]
    UnsupportedType {
        entity_type: String,
        /// The rejected instance, kept for diagnostics
        instance: Option<Box<StoreObject>>,
    },
    #[error("{instance_type} not compatible with {expected}")]
    IncompatibleType {
        instance_type: String,
        expected: String,
    },
    #[error("Conversion to Stix must be used with a fully loaded instance")]
    IncompleteInstance,
    #[error("Cannot convert relation without a resolved {endpoint}: {id}")]
    UnresolvedRelation { endpoint: String, id: String },
    // Functional error: the converter produced something it should never produce
    #[error("Invalid stix data conversion for {0}")]
    InvalidConversion(String),
    // Basic parsing errors
    #[error("DateTime error: {0}")]
    DateTimeError(JiffError),
    #[error("Could not parse String {0} as a valid STIX 2.1 Identifier")]
    ParseIdentifierError(String),
    #[error("Could not parse timestamp {0} as a valid STIX 2.1 Timestamp")]
    ParseTimestampError(String),
    // `serde_json:Error`s are converted to Strings during error mapping because that Error type does not `impl Clone`
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
    // Converter configuration errors
    #[error("Invalid converter configuration: {0}")]
    ConfigError(String),
}

impl StixError {
    /// Whether the error belongs to the "unsupported" family, i.e. the caller handed over an instance that cannot be converted.
    ///
    /// Unresolved relationship endpoints are a precondition failure and count as unsupported.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            StixError::UnsupportedType { .. }
                | StixError::IncompatibleType { .. }
                | StixError::IncompleteInstance
                | StixError::UnresolvedRelation { .. }
        )
    }

    pub(crate) fn unsupported(instance: &StoreObject) -> Self {
        StixError::UnsupportedType {
            entity_type: instance.entity_type.clone(),
            instance: Some(Box::new(instance.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::StixError;
    use test_log::test;

    #[test]
    fn unresolved_relation_message_names_the_endpoint() {
        let error = StixError::UnresolvedRelation {
            endpoint: "to".to_string(),
            id: "4a2b4b0e-7b3a-4d8e-9a43-5d1f0f6c2b11".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Cannot convert relation without a resolved to: 4a2b4b0e-7b3a-4d8e-9a43-5d1f0f6c2b11"
        );
        assert!(error.is_unsupported());
    }

    #[test]
    fn invalid_conversion_is_not_unsupported() {
        let error = StixError::InvalidConversion("identity--x".to_string());
        assert!(!error.is_unsupported());
    }
}
