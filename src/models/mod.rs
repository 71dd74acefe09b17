//! Schema model trees.
//!
//! Two parallel representations of the same data shape:
//!
//! - [`wire`]: the external, self-describing wire schema (records, unions,
//!   arrays, maps, primitives), including the encoding idioms
//!   (nullable-as-union, map-as-array-of-pairs) that never appear in the
//!   logical model.
//! - [`logical`]: the internal table-type model (structs, lists, maps,
//!   primitives).
//!
//! Both trees are built by collaborators before a traversal begins and are
//! immutable for its duration.

pub mod logical;
pub mod wire;

pub use logical::{LogicalField, LogicalPrimitive, LogicalType};
pub use wire::{WireField, WirePrimitive, WireSchema};
