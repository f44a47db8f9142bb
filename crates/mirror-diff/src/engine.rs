//! The recursive structural comparator.
//!
//! [`DiffEngine::compare`] walks two objects field by field through the
//! [`Reflect`](mirror_types::Reflect) boundary and produces a
//! [`DiffNode`] tree of every mismatch. Field values that are themselves
//! objects are compared recursively; everything else goes through the
//! equivalence rules in [`crate::rules`].
//!
//! Recursion depth is threaded through every call as an explicit
//! parameter, so a shared engine is freely reentrant; there is no
//! process-wide depth state.

use std::collections::BTreeMap;

use tracing::warn;

use mirror_reflect::{EntityUnwrapper, NoopUnwrapper, TypeRegistry};
use mirror_types::{ObjectRef, Value};

use crate::error::{DiffError, DiffResult};
use crate::node::DiffNode;
use crate::rules;

/// Maximum nesting depth of a comparison.
///
/// Comparison entered at this depth is refused and reported as
/// `different` without inspecting the pair. This bounds the work on
/// cyclic or deeply-proxied object graphs at the cost of false
/// `different` verdicts past the cutoff.
pub const MAX_DEPTH: usize = 10;

static NOOP: NoopUnwrapper = NoopUnwrapper;

/// Recursive field-by-field comparator.
///
/// Borrows the registry (and optionally an unwrapper) for the duration of
/// the comparisons; holds no mutable state of its own.
pub struct DiffEngine<'a> {
    pub(crate) registry: &'a TypeRegistry,
    pub(crate) unwrapper: &'a dyn EntityUnwrapper,
}

impl<'a> DiffEngine<'a> {
    /// An engine over the given registry with no proxy unwrapping.
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            unwrapper: &NOOP,
        }
    }

    /// An engine that resolves proxies through `unwrapper` before
    /// introspecting either operand.
    pub fn with_unwrapper(registry: &'a TypeRegistry, unwrapper: &'a dyn EntityUnwrapper) -> Self {
        Self { registry, unwrapper }
    }

    /// Compare two objects and report every mismatched field.
    ///
    /// The objects may be of different runtime types; fields are matched
    /// by name against the right-hand object's properties. Fields carrying
    /// an ignore marker for the right-hand type are skipped. A property
    /// that was enumerated but cannot be read aborts the whole comparison.
    pub fn compare(
        &self,
        left: Option<&ObjectRef>,
        right: Option<&ObjectRef>,
    ) -> DiffResult<DiffNode> {
        self.compare_at(left, right, 0)
    }

    /// Whether two objects hold equivalent values in every compared field.
    pub fn have_same_values(
        &self,
        left: Option<&ObjectRef>,
        right: Option<&ObjectRef>,
    ) -> DiffResult<bool> {
        Ok(self.compare(left, right)?.is_same())
    }

    fn compare_at(
        &self,
        left: Option<&ObjectRef>,
        right: Option<&ObjectRef>,
        depth: usize,
    ) -> DiffResult<DiffNode> {
        let (left, right) = match (left, right) {
            (None, None) => return Ok(DiffNode::same()),
            _ if depth == MAX_DEPTH => {
                warn!(depth, "maximum comparison depth reached, refusing to descend");
                return Ok(DiffNode::different());
            }
            (Some(left), None) => {
                warn!(type_name = left.type_name(), "right operand is absent");
                let mut node = DiffNode::different();
                node.add_leaf(left.type_name(), Value::Object(left.clone()), Value::Null);
                return Ok(node);
            }
            (None, Some(right)) => {
                warn!(type_name = right.type_name(), "left operand is absent");
                let mut node = DiffNode::different();
                node.add_leaf(right.type_name(), Value::Null, Value::Object(right.clone()));
                return Ok(node);
            }
            (Some(left), Some(right)) => (left, right),
        };

        let left = self.unwrapper.unwrap_entity(left);
        let right = self.unwrapper.unwrap_entity(right);

        // Snapshot every readable property of the left object by name.
        let mut left_values: BTreeMap<String, Value> = BTreeMap::new();
        for fd in left.fields() {
            if !fd.readable {
                continue;
            }
            let value = left.get(&fd.name).map_err(|source| DiffError::Introspection {
                type_name: left.type_name().to_string(),
                field: fd.name.clone(),
                source,
            })?;
            left_values.insert(fd.name, value);
        }

        let mut node = DiffNode::same();
        let right_type = right.type_name().to_string();
        for fd in right.fields() {
            if !fd.readable {
                continue;
            }
            if self.registry.is_ignored(&right_type, &fd.name) {
                continue;
            }
            let v1 = left_values.get(&fd.name).cloned().unwrap_or(Value::Null);
            let v2 = right.get(&fd.name).map_err(|source| DiffError::Introspection {
                type_name: right_type.clone(),
                field: fd.name.clone(),
                source,
            })?;

            if let Value::Object(inner) = &v1 {
                if !self.registry.is_opaque(inner.type_name()) {
                    match &v2 {
                        Value::Object(right_inner) => {
                            let child = self.compare_at(Some(inner), Some(right_inner), depth + 1)?;
                            if !child.is_same() {
                                node.add_child(fd.name, child);
                            }
                        }
                        Value::Null => {
                            let child = self.compare_at(Some(inner), None, depth + 1)?;
                            if !child.is_same() {
                                node.add_child(fd.name, child);
                            }
                        }
                        other => {
                            // Object on one side, terminal on the other.
                            warn!(
                                field = %fd.name,
                                left = %v1,
                                right = %other,
                                "property values are not equal"
                            );
                            node.add_leaf(fd.name, v1.clone(), v2.clone());
                        }
                    }
                    continue;
                }
            }

            if rules::is_type_token(&v1) && rules::is_type_token(&v2) {
                continue;
            }
            if !rules::values_equal(&v1, &v2, &fd.kind) {
                warn!(
                    field = %fd.name,
                    left = %rules::normalize_null_as_zero(&v1, &fd.kind),
                    right = %rules::normalize_null_as_zero(&v2, &fd.kind),
                    "property values are not equal"
                );
                node.add_leaf(fd.name, v1, v2);
            }
        }
        Ok(node)
    }
}
