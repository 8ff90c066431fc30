//! Data structures and functions for converting platform observables into STIX Cyber-observable Objects (SCOs).

pub mod sco;
pub mod sco_types;
mod tests;
