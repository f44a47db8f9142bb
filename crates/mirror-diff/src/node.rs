//! The diff result tree.
//!
//! A comparison produces one [`DiffNode`] per compared object pair. A node
//! is either the `same` terminal, a leaf conflict holding the two values
//! that disagreed, or an inner node whose children map field names to the
//! nested results that disagreed. Nodes are built during a single
//! comparison call and never mutated afterwards; the caller owns the tree.

use std::collections::BTreeMap;

use mirror_types::Value;

/// The result of comparing two objects field by field.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffNode {
    same: bool,
    left: Option<Value>,
    right: Option<Value>,
    children: BTreeMap<String, DiffNode>,
}

impl DiffNode {
    /// The `same` verdict with no conflicts.
    pub(crate) fn same() -> Self {
        Self {
            same: true,
            left: None,
            right: None,
            children: BTreeMap::new(),
        }
    }

    /// A `different` verdict with no recorded conflicts (depth exhaustion).
    pub(crate) fn different() -> Self {
        Self {
            same: false,
            ..Self::same()
        }
    }

    /// A leaf conflict holding the two values that disagreed.
    pub(crate) fn conflict(left: Value, right: Value) -> Self {
        Self {
            same: false,
            left: Some(left),
            right: Some(right),
            children: BTreeMap::new(),
        }
    }

    /// Record a leaf conflict for a field. Marks this node not-same.
    pub(crate) fn add_leaf(&mut self, field: impl Into<String>, left: Value, right: Value) {
        self.children.insert(field.into(), Self::conflict(left, right));
        self.same = false;
    }

    /// Attach a nested comparison result for a field. Marks this node
    /// not-same.
    pub(crate) fn add_child(&mut self, field: impl Into<String>, child: DiffNode) {
        self.children.insert(field.into(), child);
        self.same = false;
    }

    /// Whether the compared pair held equivalent values everywhere.
    pub fn is_same(&self) -> bool {
        self.same
    }

    /// The left-hand value of a leaf conflict.
    pub fn left_value(&self) -> Option<&Value> {
        self.left.as_ref()
    }

    /// The right-hand value of a leaf conflict.
    pub fn right_value(&self) -> Option<&Value> {
        self.right.as_ref()
    }

    /// Names of the fields that disagreed, in name order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.keys().map(String::as_str).collect()
    }

    /// The recorded conflict for a field.
    pub fn child(&self, field: &str) -> Option<&DiffNode> {
        self.children.get(field)
    }

    /// Whether this node is a leaf conflict (values, no nested fields).
    pub fn is_leaf(&self) -> bool {
        self.left.is_some() && self.children.is_empty()
    }

    /// Render the tree as a JSON report.
    ///
    /// Leaf values are rendered through their `Display` form; nested
    /// results appear under `"fields"`.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("same".into(), serde_json::Value::Bool(self.same));
        if let Some(left) = &self.left {
            map.insert("left".into(), serde_json::Value::String(left.to_string()));
        }
        if let Some(right) = &self.right {
            map.insert("right".into(), serde_json::Value::String(right.to_string()));
        }
        if !self.children.is_empty() {
            let fields: serde_json::Map<String, serde_json::Value> = self
                .children
                .iter()
                .map(|(name, child)| (name.clone(), child.to_json()))
                .collect();
            map.insert("fields".into(), serde_json::Value::Object(fields));
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn same_terminal_has_no_children() {
        let node = DiffNode::same();
        assert!(node.is_same());
        assert!(node.child_names().is_empty());
        assert!(node.left_value().is_none());
        assert!(!node.is_leaf());
    }

    #[test]
    fn adding_a_leaf_marks_not_same() {
        let mut node = DiffNode::same();
        node.add_leaf("qty", Value::Int(1), Value::Int(2));

        assert!(!node.is_same());
        assert_eq!(node.child_names(), vec!["qty"]);

        let leaf = node.child("qty").unwrap();
        assert!(leaf.is_leaf());
        assert_eq!(leaf.left_value(), Some(&Value::Int(1)));
        assert_eq!(leaf.right_value(), Some(&Value::Int(2)));
    }

    #[test]
    fn adding_a_child_marks_not_same() {
        let mut inner = DiffNode::same();
        inner.add_leaf("name", Value::text("a"), Value::text("b"));

        let mut node = DiffNode::same();
        node.add_child("customer", inner);

        assert!(!node.is_same());
        let child = node.child("customer").unwrap();
        assert!(!child.is_leaf());
        assert_eq!(child.child_names(), vec!["name"]);
    }

    #[test]
    fn child_lookup_misses_return_none() {
        let mut node = DiffNode::same();
        node.add_leaf("qty", Value::Int(1), Value::Int(2));
        assert!(node.child("price").is_none());
    }

    #[test]
    fn json_report_shape() {
        let mut node = DiffNode::same();
        node.add_leaf("qty", Value::Int(1), Value::Null);

        assert_eq!(
            node.to_json(),
            json!({
                "same": false,
                "fields": {
                    "qty": { "same": false, "left": "1", "right": "null" }
                }
            })
        );
    }
}
