//! Identity-based matching of unordered entity collections.
//!
//! Two collections are compared by pairing elements that share an entity
//! identity key and running the structural comparator over each pair. The
//! result is an aggregate verdict, not a tree: callers wanting per-field
//! detail compare the paired elements directly.
//!
//! Pairing is first-match-wins and does not consume matched elements of
//! the smaller collection. With duplicate identity keys an element can be
//! matched against an already-paired counterpart; that heuristic is kept
//! exactly as the verdicts depend on it.

use tracing::debug;

use mirror_types::{ObjectRef, Value};

use crate::engine::DiffEngine;
use crate::error::{DiffError, DiffResult};

impl DiffEngine<'_> {
    /// Compare two unordered collections of entities.
    ///
    /// A size difference forces the verdict to `false` even when every
    /// element of the larger collection finds a matching counterpart. An
    /// empty smaller collection is never a match, including when both
    /// collections are empty.
    pub fn compare_collections(
        &self,
        c1: &[ObjectRef],
        c2: &[ObjectRef],
    ) -> DiffResult<bool> {
        let mut same = true;
        let (lc, sc) = if c1.len() == c2.len() {
            debug!(size = c1.len(), "collections have the same size");
            (c1, c2)
        } else if c1.len() > c2.len() {
            debug!("first collection is larger than the second");
            same = false;
            (c1, c2)
        } else {
            debug!("first collection is smaller than the second");
            same = false;
            (c2, c1)
        };
        if sc.is_empty() {
            debug!("smaller collection is empty, nothing to match");
            return Ok(false);
        }

        for o1 in lc {
            let mut has_match = false;
            for o2 in sc {
                if self.is_same_entity(o1, o2)? {
                    let result = self.compare(Some(o1), Some(o2))?;
                    has_match = result.is_same();
                    break;
                }
            }
            same &= has_match;
        }
        Ok(same)
    }

    /// Whether two objects are the same entity: both types registered as
    /// identity-bearing, identical runtime types, and non-null, equal
    /// identity values.
    pub fn is_same_entity(&self, o1: &ObjectRef, o2: &ObjectRef) -> DiffResult<bool> {
        let t1 = o1.type_name();
        let t2 = o2.type_name();
        let (Some(f1), Some(f2)) = (
            self.registry.identity_field(t1),
            self.registry.identity_field(t2),
        ) else {
            return Ok(false);
        };
        if t1 != t2 {
            return Ok(false);
        }

        let id1 = o1.get(f1).map_err(|source| DiffError::Introspection {
            type_name: t1.to_string(),
            field: f1.to_string(),
            source,
        })?;
        let id2 = o2.get(f2).map_err(|source| DiffError::Introspection {
            type_name: t2.to_string(),
            field: f2.to_string(),
            source,
        })?;
        if matches!(id1, Value::Null) || matches!(id2, Value::Null) {
            return Ok(false);
        }

        let same = id1 == id2;
        if same {
            debug!(type_name = t1, "entities share the same identity");
        }
        Ok(same)
    }
}
