//! Declared property types and descriptors.
//!
//! A [`FieldKind`] is the *declared* type of a named property, as reported by
//! the introspector. Declared kinds drive null-as-zero normalization during
//! comparison and assignability during property copy; they are deliberately
//! separate from the runtime [`Value`] a property currently holds.

use crate::value::Value;

/// The declared type of a named property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    Text,
    /// An enumeration; carries the declaring type name.
    Enum(String),
    /// A nested object; carries the declared type name.
    Object(String),
    Collection,
    /// A type-descriptor property.
    TypeToken,
    /// Anything the introspector cannot classify further.
    Other,
}

impl FieldKind {
    /// Whether a runtime value can be stored in a property of this declared
    /// kind. `Null` is accepted by every kind.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (FieldKind::Bool, Value::Bool(_)) => true,
            (FieldKind::Int, Value::Int(_)) => true,
            (FieldKind::Float, Value::Float(_)) => true,
            (FieldKind::Text, Value::Text(_)) => true,
            (FieldKind::Enum(decl), Value::Enum(e)) => e.decl == *decl,
            (FieldKind::Object(decl), Value::Object(o)) => o.type_name() == decl,
            (FieldKind::Collection, Value::Collection(_)) => true,
            (FieldKind::TypeToken, Value::TypeToken(_)) => true,
            (FieldKind::Other, _) => true,
            _ => false,
        }
    }
}

/// One named property of an introspectable type, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    pub readable: bool,
    pub writable: bool,
}

impl FieldDescriptor {
    /// A readable and writable property.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            readable: true,
            writable: true,
        }
    }

    /// A readable property with no write accessor.
    pub fn read_only(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            writable: false,
            ..Self::new(name, kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::EnumValue;

    #[test]
    fn null_is_accepted_by_every_kind() {
        for kind in [
            FieldKind::Bool,
            FieldKind::Int,
            FieldKind::Float,
            FieldKind::Text,
            FieldKind::Enum("Status".into()),
            FieldKind::Object("Order".into()),
            FieldKind::Collection,
            FieldKind::TypeToken,
            FieldKind::Other,
        ] {
            assert!(kind.accepts(&Value::Null), "{kind:?} must accept Null");
        }
    }

    #[test]
    fn scalar_kinds_accept_matching_values_only() {
        assert!(FieldKind::Int.accepts(&Value::Int(1)));
        assert!(!FieldKind::Int.accepts(&Value::Float(1.0)));
        assert!(!FieldKind::Int.accepts(&Value::text("1")));
        assert!(FieldKind::Text.accepts(&Value::text("x")));
        assert!(!FieldKind::Text.accepts(&Value::Bool(true)));
    }

    #[test]
    fn enum_kind_checks_declaring_type() {
        let kind = FieldKind::Enum("Status".into());
        assert!(kind.accepts(&Value::Enum(EnumValue::new("Status", "Open"))));
        assert!(!kind.accepts(&Value::Enum(EnumValue::new("Phase", "Open"))));
    }

    #[test]
    fn other_kind_accepts_anything() {
        assert!(FieldKind::Other.accepts(&Value::Int(1)));
        assert!(FieldKind::Other.accepts(&Value::Collection(vec![])));
    }

    #[test]
    fn read_only_descriptor_has_no_write_accessor() {
        let fd = FieldDescriptor::read_only("id", FieldKind::Int);
        assert!(fd.readable);
        assert!(!fd.writable);
    }
}
