//! Error types for the diff crate.

use mirror_types::AccessError;

/// Errors that can occur during structural comparison.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A property enumerated by the introspector could not be read.
    #[error("cannot read property '{field}' of '{type_name}'")]
    Introspection {
        type_name: String,
        field: String,
        #[source]
        source: AccessError,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
