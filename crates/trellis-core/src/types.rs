//! Trellis Core Types
//!
//! This module contains the in-memory data model for Trellis records:
//! hierarchical resource paths and the typed values carried at them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A hierarchical resource path into the Trellis data tree.
///
/// Elements are ordered root to leaf; the optional `origin` tags which
/// naming universe the path belongs to. An empty origin means absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub origin: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<PathElement>,
}

impl Path {
    /// The root path: no origin, no elements.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from a sequence of elements.
    pub fn new(elements: Vec<PathElement>) -> Self {
        Self {
            origin: String::new(),
            elements,
        }
    }

    /// Set the origin tag.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Returns `true` if the path has no origin and no elements.
    pub fn is_empty(&self) -> bool {
        self.origin.is_empty() && self.elements.is_empty()
    }

    /// Number of elements in the path.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

/// One named step of a [`Path`], optionally qualified by keys.
///
/// Key insertion order is not significant: two elements with the same
/// key/value pairs are equivalent regardless of how the map was built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathElement {
    pub name: String,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub keys: HashMap<String, String>,
}

impl PathElement {
    /// Build an unkeyed element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trellis_core::PathElement;
    ///
    /// let elem = PathElement::new("interface").with_key("name", "eth0");
    /// assert_eq!(elem.name, "interface");
    /// assert_eq!(elem.keys.get("name").map(String::as_str), Some("eth0"));
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: HashMap::new(),
        }
    }

    /// Add a key/value qualifier.
    pub fn with_key(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.keys.insert(key.into(), value.into());
        self
    }
}

/// A fixed-point decimal: `digits × 10^-precision`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Decimal64 {
    pub digits: i64,
    pub precision: u32,
}

impl Decimal64 {
    pub fn new(digits: i64, precision: u32) -> Self {
        Self { digits, precision }
    }

    /// The effective numeric value.
    ///
    /// Precisions beyond the f64 exponent range underflow to zero rather
    /// than wrapping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trellis_core::Decimal64;
    ///
    /// assert_eq!(Decimal64::new(1234, 2).to_f64(), 12.34);
    /// assert_eq!(Decimal64::new(1234, 0).to_f64(), 1234.0);
    /// ```
    pub fn to_f64(self) -> f64 {
        let exp = i32::try_from(self.precision).unwrap_or(i32::MAX);
        self.digits as f64 * 10f64.powi(-exp)
    }
}

/// The typed value carried at a path.
///
/// A closed tagged union: exactly one variant is populated, with
/// [`TypedValue::Empty`] standing for the valid "no value" state that a
/// decoder produces for an unpopulated payload. Unrecognized payloads are
/// carried as their raw encoded bytes in [`TypedValue::Any`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypedValue {
    #[default]
    Empty,
    Int(i64),
    Uint(u64),
    Float(f64),
    Decimal(Decimal64),
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
    Json(Vec<u8>),
    JsonIetf(Vec<u8>),
    LeafList(Vec<TypedValue>),
    Any(Vec<u8>),
}

impl TypedValue {
    /// Returns `true` if no variant is populated.
    pub fn is_empty(&self) -> bool {
        matches!(self, TypedValue::Empty)
    }

    /// The variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            TypedValue::Empty => "empty",
            TypedValue::Int(_) => "int",
            TypedValue::Uint(_) => "uint",
            TypedValue::Float(_) => "float",
            TypedValue::Decimal(_) => "decimal",
            TypedValue::Bool(_) => "bool",
            TypedValue::String(_) => "string",
            TypedValue::Bytes(_) => "bytes",
            TypedValue::Json(_) => "json",
            TypedValue::JsonIetf(_) => "json_ietf",
            TypedValue::LeafList(_) => "leaf_list",
            TypedValue::Any(_) => "any",
        }
    }

    /// Returns the contained string if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained integer if this is an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TypedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the contained integer if this is a `Uint` value.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            TypedValue::Uint(u) => Some(*u),
            _ => None,
        }
    }

    /// Returns the contained bool if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// One protocol record: a value observed or configured at a path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Update {
    pub path: Path,
    pub value: TypedValue,
}

impl Update {
    pub fn new(path: Path, value: TypedValue) -> Self {
        Self { path, value }
    }
}
