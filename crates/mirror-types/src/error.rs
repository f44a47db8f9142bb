use thiserror::Error;

use crate::field::FieldKind;

/// Failures when reading or writing a property by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The type declares no property with this name.
    #[error("type '{type_name}' has no property '{field}'")]
    UnknownField { type_name: String, field: String },

    /// The property has no read accessor.
    #[error("property '{field}' of '{type_name}' is not readable")]
    NotReadable { type_name: String, field: String },

    /// The property has no write accessor.
    #[error("property '{field}' of '{type_name}' is not writable")]
    NotWritable { type_name: String, field: String },

    /// The value is not acceptable for the property's declared kind.
    #[error("property '{field}' of '{type_name}' does not accept the value (declared {expected:?})")]
    KindMismatch {
        type_name: String,
        field: String,
        expected: FieldKind,
    },
}
