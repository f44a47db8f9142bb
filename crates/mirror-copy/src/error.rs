use mirror_types::AccessError;
use thiserror::Error;

/// Errors that can occur during a property copy.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The target does not satisfy the editable type constraint.
    #[error("target type '{target}' is not assignable to editable type '{editable}'")]
    TypeConstraint { target: String, editable: String },

    /// A property could not be read from the source or written to the
    /// target. The copy is aborted; earlier fields may already have been
    /// written.
    #[error("could not copy property '{field}' from source to target")]
    Property {
        field: String,
        #[source]
        source: AccessError,
    },
}

impl CopyError {
    pub(crate) fn property(field: &str, source: AccessError) -> Self {
        Self::Property {
            field: field.to_string(),
            source,
        }
    }
}

/// Convenience alias for copy results.
pub type CopyResult<T> = Result<T, CopyError>;
