//! The process-wide registry.
//!
//! Created empty on first use and shared by every caller in the process.
//! Access is serialized by an `RwLock`. Poisoned locks are recovered.

use crate::{Annotatable, Registry, RegistryConfig, RegistryResult};
use propmark_core::{AnnotationKey, TypeKey, Value};
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

static GLOBAL: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// The process-wide registry.
pub fn global() -> &'static RwLock<Registry> {
    &GLOBAL
}

pub(crate) fn read() -> RwLockReadGuard<'static, Registry> {
    GLOBAL.read().unwrap_or_else(|poisoned| {
        tracing::warn!("Recovering poisoned global registry lock");
        PoisonError::into_inner(poisoned)
    })
}

pub(crate) fn write() -> RwLockWriteGuard<'static, Registry> {
    GLOBAL.write().unwrap_or_else(|poisoned| {
        tracing::warn!("Recovering poisoned global registry lock");
        PoisonError::into_inner(poisoned)
    })
}

/// Run `f` against the process-wide registry.
///
/// The global read lock is held while `f` runs. `f` must not call back into
/// the process-wide registry (`Decorator::apply`, `register`,
/// `configure_global`, `decorator_of`, ...): a write deadlocks or panics, and
/// a nested read can deadlock behind a waiting writer. Return what you need
/// from `f` and act on it afterwards.
pub fn with_global<R>(f: impl FnOnce(&Registry) -> R) -> R {
    f(&read())
}

/// Replace the configuration of the process-wide registry.
pub fn configure_global(config: RegistryConfig) {
    write().set_config(config);
}

/// Declare an [`Annotatable`] type in the process-wide registry.
pub fn register<T: Annotatable>() -> RegistryResult<()> {
    write().register::<T>()
}

/// Read the value under `key` for `property` of `T`, or `default`.
pub fn decorator_of<T: ?Sized + 'static>(
    property: &str,
    key: AnnotationKey,
    default: impl Into<Value>,
) -> Value {
    read().get_or(TypeKey::of::<T>(), property, key, default.into())
}

/// Like [`decorator_of`], taking an instance instead of a type.
pub fn decorator_of_val<T: ?Sized + 'static>(
    target: &T,
    property: &str,
    key: AnnotationKey,
    default: impl Into<Value>,
) -> Value {
    read().get_or(TypeKey::of_val(target), property, key, default.into())
}
