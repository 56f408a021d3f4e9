//! propmark Core Types
//!
//! This crate provides the foundational types used throughout propmark:
//! - Target identity (TypeKey)
//! - Annotation identity (AnnotationKey)
//! - Annotation values (the Value enum)

mod id;
mod value;

pub use id::*;
pub use value::*;
