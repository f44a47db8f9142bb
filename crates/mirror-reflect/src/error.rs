use thiserror::Error;

/// Errors while loading a [`TypeRegistry`](crate::TypeRegistry) from
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the expected shape.
    #[error("invalid registry config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An enumeration was declared with no constants.
    #[error("enum '{0}' declared with no variants")]
    EmptyEnum(String),

    /// An entity was declared with an empty identity field name.
    #[error("entity '{0}' declared with an empty identity field")]
    EmptyIdentityField(String),
}
