//! #stix-converter
//!
//! Projects hydrated threat-intelligence platform entities into STIX 2.1 objects.
//!
//! A platform entity, loaded from the store with its relations already resolved, is converted into exactly one STIX
//! object: a domain object (SDO), a cyber-observable (SCO), a relationship or sighting (SRO), or a meta object (SMO).
//! Platform metadata that has no STIX 2.1 property travels in extension blocks attached to the object.
//!
//! ```no_run
//! use stix_converter::{StixConverter, StoreObject};
//!
//! # fn main() -> Result<(), stix_converter::StixError> {
//! let instance = StoreObject::from_json(r#"{"internal_id": "...", "standard_id": "malware--...", "entity_type": "Malware"}"#)?;
//! let stix = StixConverter::default().convert(&instance)?;
//! println!("{}", stix.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```
//!
//! The objects produced by this library conform to the STIX 2.1 standard detailed in [this document](https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html).

pub mod base;
pub mod config;
pub mod cyber_observable_objects;
pub mod domain_objects;
pub mod error;
pub mod extensions;
pub mod json;
pub mod meta_objects;
pub mod normalize;
pub mod object;
pub mod relationship_objects;
pub mod store;
pub mod taxonomy;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use config::ConverterConfig;
pub use error::StixError;
pub use object::{convert_store_to_stix, StixConverter, StixObject};
pub use store::StoreObject;
