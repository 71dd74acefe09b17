//! Wire schema tree — the external, self-describing schema representation.
//!
//! A `WireSchema` is the shape data actually carries on disk or on the wire:
//! records of named fields, unions of branches, arrays, string-keyed maps,
//! and primitive leaves. Two encoding idioms appear here that have no literal
//! counterpart in the logical model:
//!
//! - **Nullable-as-union**: an optional value is encoded as a union of a
//!   `Null` primitive branch and the value's own schema.
//! - **Map-as-array-of-pairs**: a logical map with a non-string key is
//!   encoded as an array of two-field key/value records, flagged with the
//!   `logical_map` annotation.
//!
//! Parsing a textual or binary schema representation into this tree is a
//! collaborator's job; this module only defines the tree itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in the wire schema tree.
///
/// Records are identified by a fully-qualified name (e.g.
/// `"com.example.Point"`) which the matcher uses for recursion detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireSchema {
    /// An ordered sequence of named fields.
    Record {
        /// Fully-qualified record name.
        name: String,
        fields: Vec<WireField>,
    },

    /// An ordered sequence of branch schemas.
    Union { branches: Vec<WireSchema> },

    /// An array of one element schema. `logical_map` marks the
    /// array-of-key-value-pairs encoding standing in for a logical map.
    Array {
        element: Box<WireSchema>,
        logical_map: bool,
    },

    /// A string-keyed map of one value schema. The key is implicit and never
    /// carried as a sub-node.
    Map { value: Box<WireSchema> },

    /// An opaque leaf.
    Primitive(WirePrimitive),
}

/// A named member of a wire record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireField {
    pub name: String,
    pub schema: WireSchema,
}

impl WireField {
    pub fn new(name: impl Into<String>, schema: WireSchema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// Primitive wire types.
///
/// `Null` doubles as the marker branch of the nullable-as-union encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WirePrimitive {
    #[default]
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    Text,
}

impl WireSchema {
    /// Create a record schema with a fully-qualified name.
    pub fn record(name: impl Into<String>, fields: Vec<WireField>) -> Self {
        WireSchema::Record {
            name: name.into(),
            fields,
        }
    }

    /// Create a union schema from its branches, in declaration order.
    pub fn union(branches: Vec<WireSchema>) -> Self {
        WireSchema::Union { branches }
    }

    /// Create the nullable-optional encoding of `inner`: a two-branch union
    /// of `Null` and `inner`.
    pub fn optional(inner: WireSchema) -> Self {
        WireSchema::Union {
            branches: vec![WireSchema::Primitive(WirePrimitive::Null), inner],
        }
    }

    /// Create a plain (list-shaped) array schema.
    pub fn array(element: WireSchema) -> Self {
        WireSchema::Array {
            element: Box::new(element),
            logical_map: false,
        }
    }

    /// Create the map-shaped array encoding: an array of two-field
    /// `key_value` records carrying the logical-map annotation.
    pub fn map_array(key: WireSchema, value: WireSchema) -> Self {
        WireSchema::Array {
            element: Box::new(WireSchema::record(
                "key_value",
                vec![
                    WireField::new("key", key),
                    WireField::new("value", value),
                ],
            )),
            logical_map: true,
        }
    }

    /// Create a string-keyed map schema.
    pub fn map(value: WireSchema) -> Self {
        WireSchema::Map {
            value: Box::new(value),
        }
    }

    pub fn primitive(p: WirePrimitive) -> Self {
        WireSchema::Primitive(p)
    }

    /// True for the `Null` primitive, the marker branch of the
    /// nullable-as-union encoding.
    pub fn is_null(&self) -> bool {
        matches!(self, WireSchema::Primitive(WirePrimitive::Null))
    }

    /// The fully-qualified name, for record schemas only.
    pub fn full_name(&self) -> Option<&str> {
        match self {
            WireSchema::Record { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Short kind tag used in log and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            WireSchema::Record { .. } => "record",
            WireSchema::Union { .. } => "union",
            WireSchema::Array { .. } => "array",
            WireSchema::Map { .. } => "map",
            WireSchema::Primitive(_) => "primitive",
        }
    }
}

impl Default for WireSchema {
    fn default() -> Self {
        WireSchema::Primitive(WirePrimitive::Null)
    }
}

impl fmt::Display for WirePrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WirePrimitive::Null => "null",
            WirePrimitive::Boolean => "boolean",
            WirePrimitive::Int => "int",
            WirePrimitive::Long => "long",
            WirePrimitive::Float => "float",
            WirePrimitive::Double => "double",
            WirePrimitive::Bytes => "bytes",
            WirePrimitive::Text => "text",
        };
        write!(f, "{}", name)
    }
}
