//! Equivalence rules.
//!
//! Pure functions deciding when two property values count as equal and
//! which values the engine may recurse into. The null-as-zero rule exists
//! because the compared representations disagree about absence: one side
//! stores an unset numeric or text field as null, the other as a zero
//! value. Both are treated as the same state.

use mirror_types::{FieldKind, Value};

/// Normalize an absent value according to the field's declared kind.
///
/// `Null` declared as text becomes `"0"`; `Null` declared as a numeric kind
/// becomes the numeric zero. Every other value (and `Null` under any other
/// declared kind) is unchanged.
pub fn normalize_null_as_zero(value: &Value, declared: &FieldKind) -> Value {
    if !value.is_null() {
        return value.clone();
    }
    match declared {
        FieldKind::Text => Value::text("0"),
        FieldKind::Int => Value::Int(0),
        FieldKind::Float => Value::Float(0.0),
        _ => Value::Null,
    }
}

/// Whether two values are equal after null-as-zero normalization.
pub fn values_equal(v1: &Value, v2: &Value, declared: &FieldKind) -> bool {
    normalize_null_as_zero(v1, declared) == normalize_null_as_zero(v2, declared)
}

/// Whether a value is atomic for comparison (cannot be recursed into).
pub fn is_terminal(value: &Value) -> bool {
    !matches!(value, Value::Object(_))
}

/// Whether a value is a type descriptor.
pub fn is_type_token(value: &Value) -> bool {
    matches!(value, Value::TypeToken(_))
}
