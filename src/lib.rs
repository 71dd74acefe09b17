//! # schema-match
//!
//! Positional matching of self-describing wire schemas against logical table
//! types.
//!
//! Building readers, writers, projections, or validators for a columnar
//! table store needs simultaneous knowledge of two trees: the wire-level
//! encoding shape of the data and the logical type it represents. The
//! correspondence between the two is positional, not name-based, and the
//! wire side uses encoding idioms (nullable-as-union, map-as-array-of-pairs)
//! that never appear in the logical model. This crate provides the one
//! traversal that resolves that correspondence, plus the visitor contract
//! consumers plug their per-node behavior into.
//!
//! ## Example
//!
//! ```rust
//! use schema_match::{
//!     match_schemas, LogicalField, LogicalPrimitive, LogicalType, Result,
//!     SchemaMatchVisitor, WireField, WirePrimitive, WireSchema,
//! };
//!
//! // Count how many positions carry a known logical type.
//! struct KnownTypeCounter;
//!
//! impl SchemaMatchVisitor for KnownTypeCounter {
//!     type Output = usize;
//!
//!     fn record(
//!         &mut self,
//!         logical: Option<&LogicalType>,
//!         _wire: &WireSchema,
//!         _names: &[&str],
//!         fields: Vec<usize>,
//!     ) -> Result<usize> {
//!         Ok(logical.map_or(0, |_| 1) + fields.iter().sum::<usize>())
//!     }
//!
//!     fn primitive(
//!         &mut self,
//!         logical: Option<&LogicalType>,
//!         _wire: &WireSchema,
//!     ) -> Result<usize> {
//!         Ok(logical.map_or(0, |_| 1))
//!     }
//! }
//!
//! let wire = WireSchema::record(
//!     "com.example.Row",
//!     vec![
//!         WireField::new("id", WireSchema::Primitive(WirePrimitive::Long)),
//!         WireField::new("name", WireSchema::Primitive(WirePrimitive::Text)),
//!     ],
//! );
//! let logical = LogicalType::struct_of(vec![
//!     LogicalField::new("id", LogicalType::Primitive(LogicalPrimitive::BigInt)),
//!     LogicalField::new("name", LogicalType::Primitive(LogicalPrimitive::Text)),
//! ]);
//!
//! let known = match_schemas(Some(&logical), &wire, &mut KnownTypeCounter).unwrap();
//! assert_eq!(known, 3); // the record and both fields
//! ```
//!
//! ## Guarantees
//!
//! - Children are fully matched before a node's own callback fires
//!   (bottom-up aggregation).
//! - The logical side may be absent at any level; absence is a checked
//!   `Option`, never an implicit null.
//! - Recursive (self-referential) record schemas are rejected with
//!   [`SchemaMatchError::Recursion`], not resolved.
//! - Traversal state lives entirely within one call; matching the same
//!   trees from multiple threads needs no synchronization beyond the
//!   visitor's own state.

pub mod encoding;
pub mod errors;
pub mod matcher;
pub mod models;

// Re-export commonly used types at crate root
pub use encoding::{EncodingOracle, StandardEncoding};
pub use errors::{Result, SchemaMatchError};
pub use matcher::{match_schemas, match_schemas_with, SchemaMatchVisitor};
pub use models::{LogicalField, LogicalPrimitive, LogicalType, WireField, WirePrimitive, WireSchema};
