//! Converter configuration.
//!
//! The converter only needs to know how the platform names its storage indices and where
//! uploaded files can be retrieved from. Every field has a default, so an empty JSON object is
//! a valid configuration.

use crate::error::StixError as Error;
use serde::{Deserialize, Serialize};

fn default_storage_uri_prefix() -> String {
    "/storage/get/".to_string()
}

fn default_index_prefix() -> String {
    "opencti".to_string()
}

fn default_inferred_index_suffixes() -> Vec<String> {
    vec![
        "inferred_entities".to_string(),
        "inferred_relationships".to_string(),
    ]
}

/// Settings shared by every conversion performed by a [`StixConverter`](crate::object::StixConverter).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Prefix of the content-addressed URI under which attached files are served.
    #[serde(default = "default_storage_uri_prefix")]
    pub storage_uri_prefix: String,
    /// Prefix shared by every storage index of the platform.
    #[serde(default = "default_index_prefix")]
    pub index_prefix: String,
    /// Index name suffixes holding inferred (rule-generated) data.
    #[serde(default = "default_inferred_index_suffixes")]
    pub inferred_index_suffixes: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            storage_uri_prefix: default_storage_uri_prefix(),
            index_prefix: default_index_prefix(),
            inferred_index_suffixes: default_inferred_index_suffixes(),
        }
    }
}

impl ConverterConfig {
    /// Loads and validates a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can produce well-formed file URIs and index names
    pub fn validate(&self) -> Result<(), Error> {
        if !self.storage_uri_prefix.starts_with('/') {
            return Err(Error::ConfigError(format!(
                "storage_uri_prefix must be an absolute path, got '{}'",
                self.storage_uri_prefix
            )));
        }
        if self.index_prefix.is_empty() {
            return Err(Error::ConfigError(
                "index_prefix cannot be empty".to_string(),
            ));
        }
        if self.inferred_index_suffixes.iter().any(|s| s.is_empty()) {
            return Err(Error::ConfigError(
                "inferred_index_suffixes cannot contain an empty suffix".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the storage index an instance was read from holds inferred data
    pub fn is_inferred_index(&self, index: &str) -> bool {
        self.inferred_index_suffixes
            .iter()
            .any(|suffix| index.starts_with(&format!("{}_{}", self.index_prefix, suffix)))
    }

    /// Builds the retrieval URI of an attached file from its internal file id
    pub fn file_uri(&self, file_id: &str) -> String {
        format!("{}{}", self.storage_uri_prefix, file_id)
    }
}
