//! Data structures and functions for converting platform entities into STIX Domain Objects (SDOs).

pub mod sdo;
pub mod sdo_types;
