//! Proxy unwrapping hook.
//!
//! Persistence layers hand out lazy-loading proxies in place of concrete
//! instances. The engines never know about any particular proxy mechanism;
//! they call an [`EntityUnwrapper`] on both operands before introspection
//! and work with whatever comes back.

use mirror_types::ObjectRef;

/// Resolves a possibly-proxied instance to its underlying concrete instance.
pub trait EntityUnwrapper: Send + Sync {
    /// Return the underlying instance, or the input itself when it is not a
    /// proxy.
    fn unwrap_entity(&self, object: &ObjectRef) -> ObjectRef;
}

/// The default unwrapper: every object is already concrete.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopUnwrapper;

impl EntityUnwrapper for NoopUnwrapper {
    fn unwrap_entity(&self, object: &ObjectRef) -> ObjectRef {
        object.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mirror_types::{FieldKind, Value};

    use super::*;
    use crate::record::Record;

    #[test]
    fn noop_returns_the_same_instance() {
        let record = Record::new("Order")
            .with_field("id", FieldKind::Int, Value::Int(1))
            .into_ref();

        let unwrapped = NoopUnwrapper.unwrap_entity(&record);
        assert!(std::ptr::addr_eq(
            Arc::as_ptr(&record),
            Arc::as_ptr(&unwrapped)
        ));
    }
}
