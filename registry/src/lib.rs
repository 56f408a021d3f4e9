//! propmark Registry
//!
//! Property annotation store. Values are recorded against a
//! `(type, property, annotation key)` triple and read back with a default.
//! A process-wide registry backs the free functions; explicit `Registry`
//! values can be used where isolation is needed.

mod config;
mod decorator;
mod error;
mod global;
mod registry;
mod types;

pub use config::RegistryConfig;
pub use decorator::{decorate, Decorator};
pub use error::{RegistryError, RegistryResult};
pub use global::{
    configure_global, decorator_of, decorator_of_val, global, register, with_global,
};
pub use registry::Registry;
pub use types::*;

pub use propmark_core::{AnnotationKey, TypeKey, Value};
