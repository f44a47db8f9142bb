//! Introspection infrastructure for Mirror.
//!
//! The diff and copy engines consume objects only through the
//! [`Reflect`] capability and consult declarative per-type metadata
//! instead of scanning live objects. This crate provides that
//! infrastructure:
//!
//! # Key Types
//!
//! - [`TypeRegistry`] — Registered per-type metadata: identity fields,
//!   ignored fields, opaque types, enum declarations, field descriptions.
//!   Buildable programmatically or loaded from TOML.
//! - [`Record`] — An ordered, map-backed [`Reflect`] implementation for
//!   tests, demos, and callers without code generation.
//! - [`EntityUnwrapper`] / [`NoopUnwrapper`] — Pluggable hook that resolves
//!   lazy-loading proxies to their underlying instances before
//!   introspection.

pub mod error;
pub mod record;
pub mod registry;
pub mod unwrap;

pub use error::ConfigError;
pub use record::Record;
pub use registry::TypeRegistry;
pub use unwrap::{EntityUnwrapper, NoopUnwrapper};

pub use mirror_types::{ObjectRef, Reflect};
