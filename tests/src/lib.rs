//! Integration test support for propmark.
//!
//! Every test binary shares one process-wide registry, so tests declare
//! their own local types instead of resetting the store.

use tracing_subscriber::EnvFilter;

/// Install a test subscriber once per process. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub mod prelude {
    pub use crate::init_tracing;
    pub use propmark_core::{AnnotationKey, TypeKey, Value};
    pub use propmark_email::*;
    pub use propmark_registry::{
        configure_global, decorate, decorator_of, decorator_of_val, register, with_global,
        Annotatable, Registry, RegistryConfig, RegistryError, TypeDecl,
    };
}
