//! Reusable property decorators.

use crate::{global, Registry, RegistryResult};
use propmark_core::{AnnotationKey, TypeKey, Value};

/// An annotation ready to be attached to any number of properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    key: AnnotationKey,
    value: Value,
}

/// Create a decorator that records `value` under `key`.
pub fn decorate(key: AnnotationKey, value: impl Into<Value>) -> Decorator {
    Decorator {
        key,
        value: value.into(),
    }
}

impl Decorator {
    pub fn key(&self) -> AnnotationKey {
        self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Attach to `property` of `T` in the process-wide registry.
    pub fn apply<T: ?Sized + 'static>(&self, property: &str) -> RegistryResult<()> {
        self.apply_to(&mut global::write(), TypeKey::of::<T>(), property)
    }

    /// Attach to `property` of `target` in an explicit registry.
    pub fn apply_to(
        &self,
        registry: &mut Registry,
        target: TypeKey,
        property: &str,
    ) -> RegistryResult<()> {
        registry.set(target, property, self.key, self.value.clone())
    }
}
