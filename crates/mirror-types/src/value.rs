use std::fmt;
use std::sync::Arc;

use crate::reflect::ObjectRef;

/// A named constant of a declared enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumValue {
    /// Name of the declaring enumeration type.
    pub decl: String,
    /// Symbolic name of the constant.
    pub variant: String,
}

impl EnumValue {
    /// Create an enum constant value.
    pub fn new(decl: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            decl: decl.into(),
            variant: variant.into(),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.decl, self.variant)
    }
}

/// The runtime value of a named property.
///
/// Everything except [`Value::Object`] is terminal: it is compared as an
/// atomic value and never recursed into. `Object` carries a shared handle to
/// a nested introspectable object, which is what the diff engine descends
/// through.
#[derive(Clone)]
pub enum Value {
    /// Absent value.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A constant of a declared enumeration.
    Enum(EnumValue),
    /// A nested introspectable object.
    Object(ObjectRef),
    /// An unordered collection of values.
    Collection(Vec<Value>),
    /// A type-descriptor value (a type surfacing as a property value).
    /// Always treated as equal during comparison.
    TypeToken(String),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convenience constructor for text values.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }
}

impl PartialEq for Value {
    /// Structural equality for terminals; pointer identity for objects.
    ///
    /// Two distinct object instances are never equal here, which is what
    /// routes object-valued fields through recursive comparison instead of
    /// a scalar check.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Value::Collection(a), Value::Collection(b)) => a == b,
            (Value::TypeToken(a), Value::TypeToken(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(i) => write!(f, "Int({i})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Text(s) => write!(f, "Text({s:?})"),
            Value::Enum(e) => write!(f, "Enum({e})"),
            Value::Object(o) => write!(f, "Object({})", o.type_name()),
            Value::Collection(c) => f.debug_tuple("Collection").field(c).finish(),
            Value::TypeToken(t) => write!(f, "TypeToken({t})"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Enum(e) => write!(f, "{e}"),
            Value::Object(o) => write!(f, "{}", o.type_name()),
            Value::Collection(c) => {
                write!(f, "[")?;
                for (i, v) in c.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::TypeToken(t) => write!(f, "class {t}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccessError;
    use crate::field::FieldDescriptor;
    use crate::reflect::Reflect;

    struct Stub(&'static str);

    impl Reflect for Stub {
        fn type_name(&self) -> &str {
            self.0
        }

        fn fields(&self) -> Vec<FieldDescriptor> {
            Vec::new()
        }

        fn get(&self, field: &str) -> Result<Value, AccessError> {
            Err(AccessError::UnknownField {
                type_name: self.0.to_string(),
                field: field.to_string(),
            })
        }

        fn set(&mut self, field: &str, _value: Value) -> Result<(), AccessError> {
            Err(AccessError::UnknownField {
                type_name: self.0.to_string(),
                field: field.to_string(),
            })
        }
    }

    #[test]
    fn scalar_equality() {
        assert_eq!(Value::Int(5), Value::Int(5));
        assert_ne!(Value::Int(5), Value::Int(6));
        assert_ne!(Value::Int(0), Value::Null);
        assert_eq!(Value::text("a"), Value::text("a"));
        assert_ne!(Value::text("5"), Value::Int(5));
    }

    #[test]
    fn enum_equality_includes_declaring_type() {
        let a = Value::Enum(EnumValue::new("Status", "Open"));
        let b = Value::Enum(EnumValue::new("Status", "Open"));
        let c = Value::Enum(EnumValue::new("Phase", "Open"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn object_equality_is_pointer_identity() {
        let obj: ObjectRef = Arc::new(Stub("Order"));
        let same = Value::Object(obj.clone());
        let other = Value::Object(Arc::new(Stub("Order")));

        assert_eq!(Value::Object(obj.clone()), same);
        assert_ne!(Value::Object(obj), other);
    }

    #[test]
    fn collection_equality_is_element_wise() {
        let a = Value::Collection(vec![Value::Int(1), Value::text("x")]);
        let b = Value::Collection(vec![Value::Int(1), Value::text("x")]);
        let c = Value::Collection(vec![Value::Int(1)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_renders_short_forms() {
        let obj: ObjectRef = Arc::new(Stub("Order"));
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(
            Value::Enum(EnumValue::new("Status", "Open")).to_string(),
            "Status::Open"
        );
        assert_eq!(Value::Object(obj).to_string(), "Order");
        assert_eq!(
            Value::Collection(vec![Value::Int(1), Value::Int(2)]).to_string(),
            "[1, 2]"
        );
        assert_eq!(Value::TypeToken("Order".into()).to_string(), "class Order");
    }
}
