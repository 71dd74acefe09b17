//! Logical type tree — the internal table-type model.
//!
//! A `LogicalType` is the type a position in a table actually has, free of
//! wire-encoding idioms: there is no union variant (nullability and tagged
//! unions are wire-side encodings) and no annotation flags. During some
//! derivation passes a logical type is not yet known at a position, so the
//! matcher threads `Option<&LogicalType>` everywhere; `None` is the checked
//! "absent" case, not an implicit null.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in the logical type tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalType {
    /// An ordered sequence of named fields.
    Struct(Vec<LogicalField>),

    /// A list of one element type.
    List(Box<LogicalType>),

    /// A map of one key type and one value type.
    Map {
        key: Box<LogicalType>,
        value: Box<LogicalType>,
    },

    /// An opaque leaf.
    Primitive(LogicalPrimitive),
}

/// A named member of a logical struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalField {
    pub name: String,
    pub data_type: LogicalType,
}

impl LogicalField {
    pub fn new(name: impl Into<String>, data_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Primitive logical types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalPrimitive {
    Boolean,
    Int,
    BigInt,
    Float,
    Double,
    Text,
    Bytes,
    Date,
    Timestamp,
    Uuid,
    Decimal { precision: u8, scale: u8 },
}

impl LogicalType {
    pub fn struct_of(fields: Vec<LogicalField>) -> Self {
        LogicalType::Struct(fields)
    }

    pub fn list(element: LogicalType) -> Self {
        LogicalType::List(Box::new(element))
    }

    pub fn map(key: LogicalType, value: LogicalType) -> Self {
        LogicalType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn primitive(p: LogicalPrimitive) -> Self {
        LogicalType::Primitive(p)
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, LogicalType::Struct(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, LogicalType::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, LogicalType::Map { .. })
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, LogicalType::Primitive(_))
    }

    /// The field list, for struct types only.
    pub fn as_struct(&self) -> Option<&[LogicalField]> {
        match self {
            LogicalType::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Positional field lookup, for struct types only.
    pub fn field_at(&self, index: usize) -> Option<&LogicalField> {
        self.as_struct().and_then(|fields| fields.get(index))
    }

    /// Named field lookup, for struct types only.
    pub fn field(&self, name: &str) -> Option<&LogicalField> {
        self.as_struct()
            .and_then(|fields| fields.iter().find(|f| f.name == name))
    }

    /// The element type, for list types only.
    pub fn element_type(&self) -> Option<&LogicalType> {
        match self {
            LogicalType::List(element) => Some(element),
            _ => None,
        }
    }

    /// The key type, for map types only.
    pub fn key_type(&self) -> Option<&LogicalType> {
        match self {
            LogicalType::Map { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The value type, for map types only.
    pub fn value_type(&self) -> Option<&LogicalType> {
        match self {
            LogicalType::Map { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Struct(fields) => {
                write!(f, "STRUCT<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.data_type)?;
                }
                write!(f, ">")
            }
            LogicalType::List(element) => write!(f, "LIST<{}>", element),
            LogicalType::Map { key, value } => write!(f, "MAP<{}, {}>", key, value),
            LogicalType::Primitive(p) => write!(f, "{}", p),
        }
    }
}

impl fmt::Display for LogicalPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalPrimitive::Boolean => write!(f, "BOOLEAN"),
            LogicalPrimitive::Int => write!(f, "INT"),
            LogicalPrimitive::BigInt => write!(f, "BIGINT"),
            LogicalPrimitive::Float => write!(f, "FLOAT"),
            LogicalPrimitive::Double => write!(f, "DOUBLE"),
            LogicalPrimitive::Text => write!(f, "TEXT"),
            LogicalPrimitive::Bytes => write!(f, "BYTES"),
            LogicalPrimitive::Date => write!(f, "DATE"),
            LogicalPrimitive::Timestamp => write!(f, "TIMESTAMP"),
            LogicalPrimitive::Uuid => write!(f, "UUID"),
            LogicalPrimitive::Decimal { precision, scale } => {
                write!(f, "DECIMAL({}, {})", precision, scale)
            }
        }
    }
}
