//! Declarative per-type metadata.
//!
//! The original comparison semantics depend on four kinds of type-level
//! knowledge: which types are identity-bearing entities (and which field
//! holds the identity), which fields must be skipped during comparison,
//! which types are opaque (never recursed into), and which constants an
//! enumeration declares. A [`TypeRegistry`] holds all of it, registered up
//! front and queried by the engines; nothing is discovered by scanning live
//! objects.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Registered metadata about the types taking part in comparison and copy.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    /// Entity type name -> identity field name.
    entities: BTreeMap<String, String>,
    /// Type name -> fields skipped during comparison.
    ignored: BTreeMap<String, BTreeSet<String>>,
    /// Types whose instances are never recursed into.
    opaque: BTreeSet<String>,
    /// Enum type name -> declared constants, in declaration order.
    enums: BTreeMap<String, Vec<String>>,
    /// Type name -> (field, human-readable description), in registration order.
    descriptions: BTreeMap<String, Vec<(String, String)>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a type as an identity-bearing entity with the given identity field.
    pub fn register_entity(&mut self, type_name: impl Into<String>, id_field: impl Into<String>) {
        self.entities.insert(type_name.into(), id_field.into());
    }

    /// Skip a field of the given type during comparison.
    ///
    /// The marker is consulted for the right-hand operand's type only;
    /// registering the left-hand type has no effect on that comparison.
    pub fn register_ignored_field(
        &mut self,
        type_name: impl Into<String>,
        field: impl Into<String>,
    ) {
        self.ignored
            .entry(type_name.into())
            .or_default()
            .insert(field.into());
    }

    /// Mark a type as opaque: its instances are compared by identity and
    /// never recursed into.
    pub fn register_opaque(&mut self, type_name: impl Into<String>) {
        self.opaque.insert(type_name.into());
    }

    /// Declare an enumeration and its constants, in declaration order.
    pub fn register_enum<I, S>(&mut self, decl: impl Into<String>, variants: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enums
            .insert(decl.into(), variants.into_iter().map(Into::into).collect());
    }

    /// Attach a human-readable description to a field of a type.
    pub fn register_description(
        &mut self,
        type_name: impl Into<String>,
        field: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.descriptions
            .entry(type_name.into())
            .or_default()
            .push((field.into(), text.into()));
    }

    /// Whether the type is a registered identity-bearing entity.
    pub fn is_entity(&self, type_name: &str) -> bool {
        self.entities.contains_key(type_name)
    }

    /// The identity field of a registered entity type.
    pub fn identity_field(&self, type_name: &str) -> Option<&str> {
        self.entities.get(type_name).map(String::as_str)
    }

    /// Whether comparison of the field is skipped for the type.
    pub fn is_ignored(&self, type_name: &str, field: &str) -> bool {
        self.ignored
            .get(type_name)
            .is_some_and(|fields| fields.contains(field))
    }

    /// Whether instances of the type are never recursed into.
    pub fn is_opaque(&self, type_name: &str) -> bool {
        self.opaque.contains(type_name)
    }

    /// The declared constants of a registered enumeration.
    pub fn enum_variants(&self, decl: &str) -> Option<&[String]> {
        self.enums.get(decl).map(Vec::as_slice)
    }

    /// The description registered for a field of a type, if any.
    pub fn field_description(&self, type_name: &str, field: &str) -> Option<&str> {
        self.descriptions.get(type_name)?.iter().find_map(|(f, d)| {
            if f == field {
                Some(d.as_str())
            } else {
                None
            }
        })
    }

    /// Every description registered for a type, in registration order.
    pub fn type_descriptions(&self, type_name: &str) -> Vec<&str> {
        self.descriptions
            .get(type_name)
            .map(|entries| entries.iter().map(|(_, d)| d.as_str()).collect())
            .unwrap_or_default()
    }

    /// Load a registry from a TOML document.
    ///
    /// ```toml
    /// opaque = ["LazyHandle"]
    ///
    /// [entities]
    /// Order = "id"
    ///
    /// [ignored]
    /// OrderDto = ["updated_at"]
    ///
    /// [enums]
    /// Status = ["Open", "Closed"]
    ///
    /// [descriptions.Order]
    /// id = "Primary key"
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: RegistryConfig = toml::from_str(input)?;

        for (type_name, id_field) in &config.entities {
            if id_field.is_empty() {
                return Err(ConfigError::EmptyIdentityField(type_name.clone()));
            }
        }
        for (decl, variants) in &config.enums {
            if variants.is_empty() {
                return Err(ConfigError::EmptyEnum(decl.clone()));
            }
        }

        let mut registry = Self {
            entities: config.entities,
            ignored: config.ignored,
            opaque: config.opaque,
            enums: config.enums,
            descriptions: BTreeMap::new(),
        };
        for (type_name, fields) in config.descriptions {
            for (field, text) in fields {
                registry.register_description(&type_name, field, text);
            }
        }

        debug!(
            entities = registry.entities.len(),
            enums = registry.enums.len(),
            "loaded type registry from config"
        );
        Ok(registry)
    }
}

/// Serde mirror of the TOML document shape.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RegistryConfig {
    entities: BTreeMap<String, String>,
    ignored: BTreeMap<String, BTreeSet<String>>,
    opaque: BTreeSet<String>,
    enums: BTreeMap<String, Vec<String>>,
    descriptions: BTreeMap<String, BTreeMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_registration_and_lookup() {
        let mut registry = TypeRegistry::new();
        registry.register_entity("Order", "id");

        assert!(registry.is_entity("Order"));
        assert_eq!(registry.identity_field("Order"), Some("id"));
        assert!(!registry.is_entity("OrderDto"));
        assert_eq!(registry.identity_field("OrderDto"), None);
    }

    #[test]
    fn ignored_fields_are_per_type() {
        let mut registry = TypeRegistry::new();
        registry.register_ignored_field("OrderDto", "updated_at");

        assert!(registry.is_ignored("OrderDto", "updated_at"));
        assert!(!registry.is_ignored("OrderDto", "id"));
        assert!(!registry.is_ignored("Order", "updated_at"));
    }

    #[test]
    fn opaque_types() {
        let mut registry = TypeRegistry::new();
        registry.register_opaque("LazyHandle");

        assert!(registry.is_opaque("LazyHandle"));
        assert!(!registry.is_opaque("Order"));
    }

    #[test]
    fn enum_variants_preserve_declaration_order() {
        let mut registry = TypeRegistry::new();
        registry.register_enum("Status", ["Open", "Closed", "Archived"]);

        assert_eq!(
            registry.enum_variants("Status"),
            Some(&["Open".to_string(), "Closed".into(), "Archived".into()][..])
        );
        assert_eq!(registry.enum_variants("Phase"), None);
    }

    #[test]
    fn descriptions_in_registration_order() {
        let mut registry = TypeRegistry::new();
        registry.register_description("Order", "id", "Primary key");
        registry.register_description("Order", "total", "Gross total");

        assert_eq!(registry.field_description("Order", "id"), Some("Primary key"));
        assert_eq!(registry.field_description("Order", "missing"), None);
        assert_eq!(
            registry.type_descriptions("Order"),
            vec!["Primary key", "Gross total"]
        );
        assert!(registry.type_descriptions("OrderDto").is_empty());
    }

    #[test]
    fn load_from_toml() {
        let registry = TypeRegistry::from_toml_str(
            r#"
            opaque = ["LazyHandle"]

            [entities]
            Order = "id"

            [ignored]
            OrderDto = ["updated_at"]

            [enums]
            Status = ["Open", "Closed"]

            [descriptions.Order]
            id = "Primary key"
            "#,
        )
        .unwrap();

        assert_eq!(registry.identity_field("Order"), Some("id"));
        assert!(registry.is_ignored("OrderDto", "updated_at"));
        assert!(registry.is_opaque("LazyHandle"));
        assert_eq!(
            registry.enum_variants("Status"),
            Some(&["Open".to_string(), "Closed".into()][..])
        );
        assert_eq!(registry.field_description("Order", "id"), Some("Primary key"));
    }

    #[test]
    fn toml_rejects_empty_enum() {
        let err = TypeRegistry::from_toml_str(
            r#"
            [enums]
            Status = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyEnum(decl) if decl == "Status"));
    }

    #[test]
    fn toml_rejects_empty_identity_field() {
        let err = TypeRegistry::from_toml_str(
            r#"
            [entities]
            Order = ""
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyIdentityField(t) if t == "Order"));
    }

    #[test]
    fn toml_rejects_unknown_sections() {
        assert!(TypeRegistry::from_toml_str("[surprises]\nx = 1\n").is_err());
    }
}
