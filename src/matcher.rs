//! Dual-tree matcher: walks a wire schema and a logical type in lock-step.
//!
//! The traversal descends both trees together, dispatching on the wire
//! node's kind and pairing each wire position with the logical type at the
//! same position — matching is strictly positional, field names on the two
//! sides are never compared. The logical side may be partially or fully
//! absent (`None`) at any level; every rule here is null-safe on that side.
//!
//! Results flow bottom-up: a node's children are fully matched before its
//! own visitor callback fires, and the children's results are handed to that
//! callback. The traversal is synchronous and call-stack-bound, so maximum
//! recursion depth equals the nesting depth of the wire schema.

use crate::encoding::{EncodingOracle, StandardEncoding};
use crate::errors::{Result, SchemaMatchError};
use crate::models::logical::LogicalType;
use crate::models::wire::{WireField, WireSchema};

/// Consumer-supplied callbacks, one per wire-node kind.
///
/// Each callback receives the matched logical type (or `None` when no
/// logical type is known at that position), the wire node, and the already
/// computed results of the node's children. Every callback defaults to a
/// no-op returning `Output::default()`, so a visitor implements only the
/// kinds it cares about.
///
/// A callback may return an error to abort the traversal; the error unwinds
/// through every enclosing recursive call.
pub trait SchemaMatchVisitor {
    type Output: Default;

    /// A record and its per-field results, in declaration order. `names`
    /// holds the wire-side field names, parallel to `fields`.
    fn record(
        &mut self,
        logical: Option<&LogicalType>,
        wire: &WireSchema,
        names: &[&str],
        fields: Vec<Self::Output>,
    ) -> Result<Self::Output> {
        let _ = (logical, wire, names, fields);
        Ok(Self::Output::default())
    }

    /// A union and its per-branch results. For the optional encoding every
    /// branch contributes a result, null branch included; for the complex
    /// encoding null branches are skipped and contribute nothing.
    fn union(
        &mut self,
        logical: Option<&LogicalType>,
        wire: &WireSchema,
        branches: Vec<Self::Output>,
    ) -> Result<Self::Output> {
        let _ = (logical, wire, branches);
        Ok(Self::Output::default())
    }

    /// A list-shaped array and its element result.
    fn array(
        &mut self,
        logical: Option<&LogicalType>,
        wire: &WireSchema,
        element: Self::Output,
    ) -> Result<Self::Output> {
        let _ = (logical, wire, element);
        Ok(Self::Output::default())
    }

    /// A map-shaped array and its key and value results.
    fn map(
        &mut self,
        logical: Option<&LogicalType>,
        wire: &WireSchema,
        key: Self::Output,
        value: Self::Output,
    ) -> Result<Self::Output> {
        let _ = (logical, wire, key, value);
        Ok(Self::Output::default())
    }

    /// A native wire map and its value result. The key is implicitly a
    /// string and is not independently matched.
    fn map_value(
        &mut self,
        logical: Option<&LogicalType>,
        wire: &WireSchema,
        value: Self::Output,
    ) -> Result<Self::Output> {
        let _ = (logical, wire, value);
        Ok(Self::Output::default())
    }

    /// A primitive leaf.
    fn primitive(
        &mut self,
        logical: Option<&LogicalType>,
        wire: &WireSchema,
    ) -> Result<Self::Output> {
        let _ = (logical, wire);
        Ok(Self::Output::default())
    }
}

/// The active-descent-path stack of record names.
///
/// Owned by one traversal invocation; concurrent traversals never share a
/// guard. A name may not appear twice on the stack at any time.
#[derive(Debug, Default)]
struct RecursionGuard {
    path: Vec<String>,
}

impl RecursionGuard {
    fn enter(&mut self, name: &str) -> Result<()> {
        if self.path.iter().any(|n| n == name) {
            return Err(SchemaMatchError::Recursion(name.to_string()));
        }
        self.path.push(name.to_string());
        Ok(())
    }

    fn exit(&mut self) {
        self.path.pop();
    }
}

/// Match `wire` against `logical` using the standard encoding conventions.
///
/// Produces the visitor's aggregated result for the root node, or the first
/// error raised anywhere in the traversal.
pub fn match_schemas<V>(
    logical: Option<&LogicalType>,
    wire: &WireSchema,
    visitor: &mut V,
) -> Result<V::Output>
where
    V: SchemaMatchVisitor,
{
    match_schemas_with(&StandardEncoding, logical, wire, visitor)
}

/// Match `wire` against `logical` with caller-supplied encoding oracles.
pub fn match_schemas_with<O, V>(
    oracle: &O,
    logical: Option<&LogicalType>,
    wire: &WireSchema,
    visitor: &mut V,
) -> Result<V::Output>
where
    O: EncodingOracle,
    V: SchemaMatchVisitor,
{
    log::trace!(
        "matching {} wire schema against logical type {}",
        wire.kind(),
        describe(logical)
    );
    let mut guard = RecursionGuard::default();
    match_node(oracle, logical, wire, visitor, &mut guard)
}

fn match_node<O, V>(
    oracle: &O,
    logical: Option<&LogicalType>,
    wire: &WireSchema,
    visitor: &mut V,
    guard: &mut RecursionGuard,
) -> Result<V::Output>
where
    O: EncodingOracle,
    V: SchemaMatchVisitor,
{
    match wire {
        WireSchema::Record { name, fields } => {
            match_record(oracle, logical, wire, name, fields, visitor, guard)
        }
        WireSchema::Union { branches } => {
            match_union(oracle, logical, wire, branches, visitor, guard)
        }
        WireSchema::Array { element, .. } => {
            match_array(oracle, logical, wire, element, visitor, guard)
        }
        WireSchema::Map { value } => {
            let map_ty = logical.filter(|t| t.is_map());
            let value_result =
                match_node(oracle, map_ty.and_then(|t| t.value_type()), value, visitor, guard)?;
            visitor.map_value(map_ty, wire, value_result)
        }
        WireSchema::Primitive(_) => visitor.primitive(logical.filter(|t| t.is_primitive()), wire),
    }
}

fn match_record<O, V>(
    oracle: &O,
    logical: Option<&LogicalType>,
    wire: &WireSchema,
    name: &str,
    fields: &[WireField],
    visitor: &mut V,
    guard: &mut RecursionGuard,
) -> Result<V::Output>
where
    O: EncodingOracle,
    V: SchemaMatchVisitor,
{
    guard.enter(name)?;
    log::trace!("descending record {}", name);

    let struct_ty = logical.filter(|t| t.is_struct());
    let mut names = Vec::with_capacity(fields.len());
    let mut results = Vec::with_capacity(fields.len());
    for (i, field) in fields.iter().enumerate() {
        // Strictly positional: wire field i pairs with logical field i.
        let partner = struct_ty.and_then(|t| t.field_at(i)).map(|f| &f.data_type);
        names.push(field.name.as_str());
        match match_node(oracle, partner, &field.schema, visitor, guard) {
            Ok(result) => results.push(result),
            Err(err) => {
                // Keep the guard consistent while the error unwinds.
                guard.exit();
                return Err(err);
            }
        }
    }

    guard.exit();
    visitor.record(struct_ty, wire, &names, results)
}

fn match_union<O, V>(
    oracle: &O,
    logical: Option<&LogicalType>,
    wire: &WireSchema,
    branches: &[WireSchema],
    visitor: &mut V,
    guard: &mut RecursionGuard,
) -> Result<V::Output>
where
    O: EncodingOracle,
    V: SchemaMatchVisitor,
{
    let mut results = Vec::with_capacity(branches.len());
    if oracle.is_optional(branches) {
        for branch in branches {
            if branch.is_null() {
                results.push(match_node(oracle, None, branch, visitor, guard)?);
            } else {
                // The optional wrapper is transparent: the value branch
                // carries the same logical type as the union itself.
                results.push(match_node(oracle, logical, branch, visitor, guard)?);
            }
        }
    } else {
        // A complex union corresponds to a logical struct whose synthetic
        // fields field0, field1, ... enumerate the non-null branches.
        let struct_ty = match logical {
            Some(t) if t.is_struct() => t,
            other => {
                return Err(SchemaMatchError::TypeMismatch(format!(
                    "complex union can only match a struct logical type, got {}",
                    describe(other)
                )))
            }
        };
        let mut index = 0usize;
        for branch in branches {
            if branch.is_null() {
                continue;
            }
            let synthetic = format!("field{}", index);
            let partner = struct_ty.field(&synthetic).ok_or_else(|| {
                SchemaMatchError::TypeMismatch(format!(
                    "complex union branch {} has no logical field named {} in {}",
                    index, synthetic, struct_ty
                ))
            })?;
            results.push(match_node(
                oracle,
                Some(&partner.data_type),
                branch,
                visitor,
                guard,
            )?);
            index += 1;
        }
    }
    visitor.union(logical, wire, results)
}

fn match_array<O, V>(
    oracle: &O,
    logical: Option<&LogicalType>,
    wire: &WireSchema,
    element: &WireSchema,
    visitor: &mut V,
    guard: &mut RecursionGuard,
) -> Result<V::Output>
where
    O: EncodingOracle,
    V: SchemaMatchVisitor,
{
    // Two authoritative signals, one per derivation direction: the wire-side
    // annotation when the logical side is not yet resolved, and the known
    // logical map type when validating against a resolved logical side.
    if oracle.is_logical_map(wire) || logical.is_some_and(|t| t.is_map()) {
        let kv_fields = match element {
            WireSchema::Record { fields, .. }
                if fields.len() == 2 && oracle.is_key_value(element) =>
            {
                fields
            }
            other => {
                return Err(SchemaMatchError::ShapeMismatch(format!(
                    "map-shaped array element must be a two-field key/value record, got {}",
                    other.kind()
                )))
            }
        };
        let map_ty = logical.filter(|t| t.is_map());
        let key_result = match_node(
            oracle,
            map_ty.and_then(|t| t.key_type()),
            &kv_fields[0].schema,
            visitor,
            guard,
        )?;
        let value_result = match_node(
            oracle,
            map_ty.and_then(|t| t.value_type()),
            &kv_fields[1].schema,
            visitor,
            guard,
        )?;
        visitor.map(map_ty, wire, key_result, value_result)
    } else {
        let list_ty = logical.filter(|t| t.is_list());
        let element_result = match_node(
            oracle,
            list_ty.and_then(|t| t.element_type()),
            element,
            visitor,
            guard,
        )?;
        visitor.array(list_ty, wire, element_result)
    }
}

fn describe(logical: Option<&LogicalType>) -> String {
    match logical {
        Some(t) => t.to_string(),
        None => "absent".to_string(),
    }
}
