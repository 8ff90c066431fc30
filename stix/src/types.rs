//! Core types for representing STIX data structures shared by the input and output models.

use crate::error::StixError as Error;
use convert_case::{Boundary, Case, Casing};
use jiff::Timestamp as JiffTimestamp;
use ordered_float::OrderedFloat;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{
    collections::BTreeMap,
    fmt,
    ops::Not,
    str::{self, FromStr},
    sync::LazyLock,
};
use strum::{AsRefStr, EnumIter, EnumString};
use uuid::Uuid;

// STIX 2.1 has a stricter standard for valid timestamps than the `jiff` crate we use.
//
// Panic: Safe to unwrap because this is a valid regex pattern
static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(.\d+)?Z$").unwrap());

/// Converts a raw string to kebab-case.
pub fn stix_case(raw_str: &str) -> String {
    raw_str
        .without_boundaries(&[Boundary::UPPER_DIGIT, Boundary::LOWER_DIGIT])
        .to_case(Case::Kebab)
}

/// A STIX 2.1 compliant identifier that uniquely identifies a STIX Object.
///
/// It consists of two parts, the object-type and a UUID.
/// The object type must exactly match the type property of the object being identified or referenced.
///
/// `Identifier` `impl`'s `Display` and `FromStr`, and its String representation is {object-type}--{UUID}, exactly as it
/// was parsed.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_64yvzeku5a5c>
#[derive(Clone, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct Identifier {
    /// The object type
    object_type: String,
    /// The UUID
    uuid: Uuid,
    /// The identifier as stored
    raw: String,
}

impl Identifier {
    /// Returns the object-type of the identifier
    pub fn get_type(&self) -> &str {
        &self.object_type
    }

    /// Returns the version number of the identifier's UUID (0 when the version is not recognized)
    pub fn uuid_version(&self) -> usize {
        self.uuid.get_version_num()
    }

    /// Whether this identifier can be exposed as an externally visible STIX id.
    ///
    /// Version 1 UUIDs are generated by the platform itself and are never trusted.
    pub fn is_trusted(&self) -> bool {
        self.uuid_version() != 1
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl str::FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (object_type, raw_uuid) = s
            .split_once("--")
            .ok_or(Error::ParseIdentifierError(s.to_string()))?;

        let object_type_fromstr = stix_case(object_type);
        if object_type_fromstr.is_empty() {
            return Err(Error::ParseIdentifierError(s.to_string()));
        }
        let uuid_fromstr =
            Uuid::from_str(raw_uuid).map_err(|_| Error::ParseIdentifierError(s.to_string()))?;

        Ok(Identifier {
            object_type: object_type_fromstr,
            uuid: uuid_fromstr,
            raw: s.to_string(),
        })
    }
}

/// A custom Timestamp struct that holds a `jiff::Timestamp`.
///
/// We use this custom type because while `Timestamp` is RFC 3339 compliant, its deserializtion is *more* generous
/// than the STIX 2.1 timestamp formatting rules.
/// A timestamp will not deserialize unless it is in the format `YYYY-MM-DDTHH:mm:ss[.s+]Z` and is not in a timezone other than UTC.
///
/// The stored string is kept and emitted as is, whatever its fractional precision.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_ksbm2nost85y>
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    value: JiffTimestamp,
    raw: String,
}

impl Timestamp {
    pub fn new(timestamp_str: &str) -> Result<Self, Error> {
        if TIMESTAMP_RE.is_match(timestamp_str).not() {
            return Err(Error::ParseTimestampError(timestamp_str.to_string()));
        }

        let timestamp = JiffTimestamp::from_str(timestamp_str).map_err(Error::DateTimeError)?;
        Ok(Self {
            value: timestamp,
            raw: timestamp_str.to_string(),
        })
    }

    /// Returns the parsed instant
    pub fn value(&self) -> JiffTimestamp {
        self.value
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// Most of the custom `impl` of `serde:Seriazlie and serde:Deserialize` are taken from `jiff::Timestamp`'s `imp` of `Deserialize`
impl serde::Serialize for Timestamp {
    #[inline]
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        use serde::de;

        struct TimestampVisitor;

        impl de::Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str("a timestamp string in STIX 2.1 format")
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Timestamp, E> {
                if !TIMESTAMP_RE.is_match(value) {
                    return Err(de::Error::custom(format!(
                        "Could not parse timestamp {} as a valid STIX 2.1 Timestamp",
                        value
                    )));
                }
                let ts: JiffTimestamp = value.parse().map_err(de::Error::custom)?;
                Ok(Timestamp {
                    value: ts,
                    raw: value.to_string(),
                })
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}

/// A hash list, with a key/value pair identifying the hashing algorithm used and the hashed value.
///
/// Unlike other dictionaries, a hash list is a mandatory mapping on the objects that carry it,
/// so it is emitted even when it holds no entry.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_odoabbtwuxyd>
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hashes(BTreeMap<String, String>);

/// Possible primitive dictionary values
///
/// This enum is to cover the case of different primitive types being stored in the same STIX dictionary
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum DictionaryValue {
    String(String),
    Bool(bool),
    Int(u64),
    SInt(i64),
    Float(OrderedFloat<f64>),
    List(Vec<DictionaryValue>),
    Dict(BTreeMap<String, DictionaryValue>),
    /// A stored `null`, removed during normalization
    Null,
}

/// A STIX dictionary of arbitrary values, such as `ipfix` or `environment_variables`
pub type StixDictionary = BTreeMap<String, DictionaryValue>;

/// The Extensions Type enumeration used in the `extension_type` discriminator of every extension block.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, AsRefStr, EnumIter, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ExtensionType {
    /// Specifies that the Extension includes a new SDO.
    NewSdo,
    /// Specifies that the Extension includes a new SCO.
    NewSco,
    /// Specifies that the Extension includes additional properties for a given STIX Object.
    PropertyExtension,
}
