//! Foundation types for Mirror.
//!
//! This crate provides the value model and the introspection boundary used
//! throughout the Mirror toolkit. Every other Mirror crate depends on
//! `mirror-types`.
//!
//! # Key Types
//!
//! - [`Value`] — Runtime value of a named property (scalars, enum constants,
//!   nested objects, collections)
//! - [`FieldKind`] — Declared type of a named property
//! - [`FieldDescriptor`] — Name, declared kind, and accessor flags of a property
//! - [`Reflect`] — Capability trait for structurally introspectable objects
//! - [`ObjectRef`] — Shared handle to an introspectable object
//! - [`AccessError`] — Failures when reading or writing a property by name

pub mod error;
pub mod field;
pub mod reflect;
pub mod value;

pub use error::AccessError;
pub use field::{FieldDescriptor, FieldKind};
pub use reflect::{ObjectRef, Reflect};
pub use value::{EnumValue, Value};
