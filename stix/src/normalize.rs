//! Removal of empty fields from projected STIX objects.
//!
//! Every optional output field is an `Option`, so "empty" is a property of the value type: an empty string, list or
//! dictionary normalizes to `None`, as does a nested structure whose optional fields are all absent. Hash mappings are
//! mandatory where they appear and are always kept, even when empty.
//!
//! Normalizing is idempotent: a normalized value normalizes to itself.

use crate::types::{DictionaryValue, ExtensionType, Hashes, Identifier, Timestamp};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// A value that can be stripped of its empty parts, or that may be empty altogether.
pub trait Normalize: Sized {
    /// Returns the value with every empty part removed, or `None` if nothing remains.
    fn normalize(self) -> Option<Self>;
}

/// Normalizes an optional field.
pub fn normalize_field<T: Normalize>(field: Option<T>) -> Option<T> {
    field.and_then(Normalize::normalize)
}

impl Normalize for String {
    fn normalize(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

// Scalars are never empty
macro_rules! normalize_as_present {
    ($($type:ty),* $(,)?) => {
        $(
            impl Normalize for $type {
                fn normalize(self) -> Option<Self> {
                    Some(self)
                }
            }
        )*
    };
}

normalize_as_present!(
    bool,
    u64,
    i64,
    OrderedFloat<f64>,
    Timestamp,
    Identifier,
    ExtensionType,
    Hashes,
);

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(self) -> Option<Self> {
        let normalized: Vec<T> = self.into_iter().filter_map(Normalize::normalize).collect();
        if normalized.is_empty() {
            None
        } else {
            Some(normalized)
        }
    }
}

impl<T: Normalize> Normalize for BTreeMap<String, T> {
    fn normalize(self) -> Option<Self> {
        let normalized: BTreeMap<String, T> = self
            .into_iter()
            .filter_map(|(key, value)| value.normalize().map(|value| (key, value)))
            .collect();
        if normalized.is_empty() {
            None
        } else {
            Some(normalized)
        }
    }
}

impl<T: Normalize> Normalize for Box<T> {
    fn normalize(self) -> Option<Self> {
        (*self).normalize().map(Box::new)
    }
}

impl Normalize for DictionaryValue {
    fn normalize(self) -> Option<Self> {
        match self {
            DictionaryValue::String(value) => value.normalize().map(DictionaryValue::String),
            DictionaryValue::List(values) => values.normalize().map(DictionaryValue::List),
            DictionaryValue::Dict(values) => values.normalize().map(DictionaryValue::Dict),
            DictionaryValue::Null => None,
            scalar => Some(scalar),
        }
    }
}

/// Implements [`Normalize`] for a struct by normalizing each of the listed `Option` fields.
///
/// Fields that are not listed are kept as they are. With `retain`, the structure is always kept; with `drop_empty` it
/// normalizes to `None` once every listed field is absent. Mandatory nested structures listed in `with [..]` are
/// normalized too, and the structure is dropped if one of them is.
macro_rules! normalize_struct {
    (retain $name:ident $(with [$($nested:ident),* $(,)?])? { $($field:ident),* $(,)? }) => {
        impl $crate::normalize::Normalize for $name {
            fn normalize(self) -> Option<Self> {
                Some(Self {
                    $($($nested: $crate::normalize::Normalize::normalize(self.$nested)?,)*)?
                    $($field: $crate::normalize::normalize_field(self.$field),)*
                    ..self
                })
            }
        }
    };
    (drop_empty $name:ident { $($field:ident),* $(,)? }) => {
        impl $crate::normalize::Normalize for $name {
            fn normalize(self) -> Option<Self> {
                let normalized = Self {
                    $($field: $crate::normalize::normalize_field(self.$field),)*
                    ..self
                };
                if true $(&& normalized.$field.is_none())* {
                    None
                } else {
                    Some(normalized)
                }
            }
        }
    };
}

/// Implements [`Normalize`] for an enum whose listed variants each wrap a normalizable value.
macro_rules! normalize_enum {
    ($name:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::normalize::Normalize for $name {
            fn normalize(self) -> Option<Self> {
                match self {
                    $($name::$variant(inner) => {
                        $crate::normalize::Normalize::normalize(inner).map($name::$variant)
                    })*
                }
            }
        }
    };
}

pub(crate) use normalize_enum;
pub(crate) use normalize_struct;
