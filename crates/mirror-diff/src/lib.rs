//! Structural deep-diff engine for Mirror.
//!
//! Compares two objects that share field names but not necessarily the same
//! runtime type (a persistence entity and its DTO mirror), producing a
//! navigable tree of every mismatched field. Also matches unordered entity
//! collections by identity key.
//!
//! # Key Types
//!
//! - [`DiffEngine`] -- Recursive field-by-field comparator
//! - [`DiffNode`] -- Verdict tree: same/different plus per-field conflicts
//! - [`rules`] -- Equivalence rules (null-as-zero normalization, terminal
//!   classification)
//! - [`DiffError`] / [`DiffResult`] -- Introspection failure propagation

pub mod collections;
pub mod engine;
pub mod error;
pub mod node;
pub mod rules;

pub use engine::{DiffEngine, MAX_DEPTH};
pub use error::{DiffError, DiffResult};
pub use node::DiffNode;
