//! Selective property transfer for Mirror.
//!
//! Copies same-named properties from one introspectable object to another.
//! The two objects need not share a runtime type; fields are matched by
//! name and copied when their declared kinds are assignable. When the
//! target declares an enumeration where the source declares text, the text
//! is coerced to the matching enum constant by symbolic name; text that
//! names no constant leaves the target field unchanged. Any other kind
//! mismatch is skipped silently.
//!
//! The copy is non-recursive: nested objects are transferred as shared
//! handles, not duplicated.

pub mod error;

use std::collections::BTreeMap;

use tracing::debug;

use mirror_reflect::TypeRegistry;
use mirror_types::{EnumValue, FieldDescriptor, FieldKind, Reflect, Value};

pub use error::{CopyError, CopyResult};

/// Copy every writable, same-named property from `source` to `target`.
pub fn copy_properties(
    source: &dyn Reflect,
    target: &mut dyn Reflect,
    registry: &TypeRegistry,
) -> CopyResult<()> {
    copy_properties_filtered(source, target, registry, None, &[])
}

/// Copy same-named properties with an optional type constraint and an
/// ignore list.
///
/// When `editable` is supplied, the target's type name must match it; a
/// mismatch is a usage error raised before any field is written. Fields
/// named in `ignore` are skipped. A failing read or write aborts the copy
/// with an error naming the offending field.
pub fn copy_properties_filtered(
    source: &dyn Reflect,
    target: &mut dyn Reflect,
    registry: &TypeRegistry,
    editable: Option<&str>,
    ignore: &[&str],
) -> CopyResult<()> {
    if let Some(editable) = editable {
        if target.type_name() != editable {
            return Err(CopyError::TypeConstraint {
                target: target.type_name().to_string(),
                editable: editable.to_string(),
            });
        }
    }

    let source_fields: BTreeMap<String, FieldDescriptor> = source
        .fields()
        .into_iter()
        .map(|fd| (fd.name.clone(), fd))
        .collect();

    for fd in target.fields() {
        if !fd.writable || ignore.contains(&fd.name.as_str()) {
            continue;
        }
        let Some(sfd) = source_fields.get(&fd.name) else {
            continue;
        };
        if !sfd.readable {
            continue;
        }

        if kind_assignable(&fd.kind, &sfd.kind) {
            let value = source
                .get(&fd.name)
                .map_err(|source| CopyError::property(&fd.name, source))?;
            target
                .set(&fd.name, value)
                .map_err(|source| CopyError::property(&fd.name, source))?;
        } else if let (FieldKind::Enum(decl), FieldKind::Text) = (&fd.kind, &sfd.kind) {
            let value = source
                .get(&fd.name)
                .map_err(|source| CopyError::property(&fd.name, source))?;
            let Value::Text(text) = value else {
                continue;
            };
            let variant = registry
                .enum_variants(decl)
                .into_iter()
                .flatten()
                .find(|variant| **variant == text);
            if let Some(variant) = variant {
                debug!(field = %fd.name, %variant, "coercing text to enum constant");
                target
                    .set(&fd.name, Value::Enum(EnumValue::new(decl.clone(), variant.clone())))
                    .map_err(|source| CopyError::property(&fd.name, source))?;
            }
            // Text naming no constant leaves the target unchanged.
        }
        // Any other declared-kind mismatch is skipped silently.
    }
    Ok(())
}

/// Whether a value read under `source` can be written under `target`.
///
/// Declared kinds must match exactly, including the declared enum or
/// object type name; there is no numeric widening.
fn kind_assignable(target: &FieldKind, source: &FieldKind) -> bool {
    target == source
}
