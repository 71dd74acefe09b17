//! Disambiguation oracles for structurally ambiguous wire encodings.
//!
//! The matcher has to answer three questions it does not own: whether a
//! union is the nullable-optional encoding, whether an array stands in for a
//! logical map, and whether a record is a valid key/value pair. The answers
//! depend on the conventions of whatever wrote the wire schema, so they are
//! supplied as a trait; [`StandardEncoding`] implements the conventions this
//! crate's own constructors produce.

use crate::models::wire::WireSchema;

/// Predicates that resolve the structurally ambiguous wire encodings.
///
/// All three are pure: they inspect the given node and return a verdict
/// without touching any other state.
pub trait EncodingOracle {
    /// Is this union the nullable-optional encoding (a null marker branch
    /// plus exactly one value branch)?
    fn is_optional(&self, branches: &[WireSchema]) -> bool;

    /// Does this array carry the logical-map annotation?
    fn is_logical_map(&self, array: &WireSchema) -> bool;

    /// Is this element schema a valid key/value pair for a map-shaped array?
    fn is_key_value(&self, element: &WireSchema) -> bool;
}

/// The conventions used by [`WireSchema::optional`] and
/// [`WireSchema::map_array`]: a two-branch union with exactly one null
/// branch, the `logical_map` annotation flag, and a two-field record
/// element.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEncoding;

impl EncodingOracle for StandardEncoding {
    fn is_optional(&self, branches: &[WireSchema]) -> bool {
        branches.len() == 2 && branches.iter().filter(|b| b.is_null()).count() == 1
    }

    fn is_logical_map(&self, array: &WireSchema) -> bool {
        matches!(
            array,
            WireSchema::Array {
                logical_map: true,
                ..
            }
        )
    }

    fn is_key_value(&self, element: &WireSchema) -> bool {
        matches!(element, WireSchema::Record { fields, .. } if fields.len() == 2)
    }
}
