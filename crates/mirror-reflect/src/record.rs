//! In-memory record for testing and embedding.
//!
//! [`Record`] is an ordered, map-backed implementation of [`Reflect`]. It is
//! suitable for unit tests, prototypes, and callers that assemble objects
//! dynamically instead of deriving the trait for their own structs.

use std::collections::BTreeMap;
use std::sync::Arc;

use mirror_types::{AccessError, FieldDescriptor, FieldKind, ObjectRef, Reflect, Value};

/// A dynamic introspectable object.
///
/// Fields keep their declaration (builder) order; values live in a map
/// keyed by field name. `set` enforces the declared kind, so a `Record`
/// honors the same accessor contract a generated implementation would.
#[derive(Clone, Debug)]
pub struct Record {
    type_name: String,
    fields: Vec<FieldDescriptor>,
    values: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record of the given type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
            values: BTreeMap::new(),
        }
    }

    /// Add a readable, writable field holding `value`.
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        value: Value,
    ) -> Self {
        let name = name.into();
        self.values.insert(name.clone(), value);
        self.fields.push(FieldDescriptor::new(name, kind));
        self
    }

    /// Add a field without a write accessor.
    pub fn with_read_only(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        value: Value,
    ) -> Self {
        let name = name.into();
        self.values.insert(name.clone(), value);
        self.fields.push(FieldDescriptor::read_only(name, kind));
        self
    }

    /// Finish building and wrap into a shared [`ObjectRef`].
    pub fn into_ref(self) -> ObjectRef {
        Arc::new(self)
    }

    fn descriptor(&self, field: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|fd| fd.name == field)
    }
}

impl Reflect for Record {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn fields(&self) -> Vec<FieldDescriptor> {
        self.fields.clone()
    }

    fn get(&self, field: &str) -> Result<Value, AccessError> {
        let fd = self.descriptor(field).ok_or_else(|| AccessError::UnknownField {
            type_name: self.type_name.clone(),
            field: field.to_string(),
        })?;
        if !fd.readable {
            return Err(AccessError::NotReadable {
                type_name: self.type_name.clone(),
                field: field.to_string(),
            });
        }
        Ok(self.values.get(field).cloned().unwrap_or(Value::Null))
    }

    fn set(&mut self, field: &str, value: Value) -> Result<(), AccessError> {
        let fd = self.descriptor(field).ok_or_else(|| AccessError::UnknownField {
            type_name: self.type_name.clone(),
            field: field.to_string(),
        })?;
        if !fd.writable {
            return Err(AccessError::NotWritable {
                type_name: self.type_name.clone(),
                field: field.to_string(),
            });
        }
        if !fd.kind.accepts(&value) {
            return Err(AccessError::KindMismatch {
                type_name: self.type_name.clone(),
                field: field.to_string(),
                expected: fd.kind.clone(),
            });
        }
        self.values.insert(field.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Record {
        Record::new("Order")
            .with_read_only("id", FieldKind::Int, Value::Int(7))
            .with_field("note", FieldKind::Text, Value::text("draft"))
    }

    #[test]
    fn fields_keep_declaration_order() {
        let names: Vec<String> = order().fields().into_iter().map(|fd| fd.name).collect();
        assert_eq!(names, vec!["id", "note"]);
    }

    #[test]
    fn get_returns_stored_value() {
        let record = order();
        assert_eq!(record.get("id").unwrap(), Value::Int(7));
        assert_eq!(record.get("note").unwrap(), Value::text("draft"));
    }

    #[test]
    fn get_unknown_field_is_an_error() {
        let err = order().get("missing").unwrap_err();
        assert!(matches!(err, AccessError::UnknownField { field, .. } if field == "missing"));
    }

    #[test]
    fn set_rewrites_a_writable_field() {
        let mut record = order();
        record.set("note", Value::text("final")).unwrap();
        assert_eq!(record.get("note").unwrap(), Value::text("final"));
    }

    #[test]
    fn set_rejects_read_only_field() {
        let mut record = order();
        let err = record.set("id", Value::Int(8)).unwrap_err();
        assert!(matches!(err, AccessError::NotWritable { field, .. } if field == "id"));
        assert_eq!(record.get("id").unwrap(), Value::Int(7));
    }

    #[test]
    fn set_enforces_declared_kind() {
        let mut record = order();
        let err = record.set("note", Value::Int(1)).unwrap_err();
        assert!(matches!(err, AccessError::KindMismatch { field, .. } if field == "note"));
    }

    #[test]
    fn set_accepts_null_for_any_kind() {
        let mut record = order();
        record.set("note", Value::Null).unwrap();
        assert_eq!(record.get("note").unwrap(), Value::Null);
    }
}
