//! Shared error types for schema matching.
//!
//! Every failure raised during a traversal is fatal to that traversal: it
//! propagates unwound through every enclosing recursive call with no local
//! recovery, and the recursion guard is popped consistently as the stack
//! unwinds. The inputs are assumed schema-valid before matching begins, so a
//! failure indicates a precondition break by the caller, not a transient
//! fault.

use thiserror::Error;

/// Errors raised while matching a wire schema against a logical type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaMatchError {
    /// A record's fully-qualified name was encountered while that name was
    /// already on the active descent path. Recursive schemas are rejected,
    /// never resolved.
    #[error("Cannot match recursive record schema: {0}")]
    Recursion(String),

    /// A wire node's assumed sub-structure violates a structural
    /// precondition (e.g. a map-shaped array whose element is not a
    /// two-field key/value record).
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The logical type supplied at a position is incompatible with the wire
    /// node's kind (e.g. a complex union matched against a non-struct).
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

/// Result type alias using SchemaMatchError.
pub type Result<T> = std::result::Result<T, SchemaMatchError>;
