//! The introspection boundary.
//!
//! [`Reflect`] is the capability every comparable or copyable object must
//! provide: enumerate its named properties and read or write them by name.
//! Callers implement it by hand or derive it via code generation; the engine
//! crates never look inside an object any other way.

use std::sync::Arc;

use crate::error::AccessError;
use crate::field::FieldDescriptor;
use crate::value::Value;

/// Shared handle to an introspectable object.
///
/// Nested objects inside a [`Value`] are held through this alias so that an
/// object graph can be walked without cloning the objects themselves.
pub type ObjectRef = Arc<dyn Reflect>;

/// A structurally introspectable object.
///
/// Contract:
/// - `fields` returns every named property in declaration order, each
///   exactly once.
/// - `get` succeeds for every property `fields` reports as readable;
///   failure to read an enumerated property is an error, never a silent
///   default.
/// - `set` rejects unknown properties, properties without a write accessor,
///   and values the declared kind does not accept.
/// - `type_name` identifies the runtime type; all registry metadata
///   (identity fields, ignore markers, opaque types) is keyed by it.
pub trait Reflect: Send + Sync {
    /// Name of the runtime type.
    fn type_name(&self) -> &str;

    /// Named properties in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor>;

    /// Read a property by name.
    fn get(&self, field: &str) -> Result<Value, AccessError>;

    /// Write a property by name.
    fn set(&mut self, field: &str, value: Value) -> Result<(), AccessError>;
}
