//! Identity types for annotation targets and annotation kinds.
//!
//! All identifiers are:
//! - Unique within the process
//! - Immutable once created
//! - Copy, so they can be used freely as map keys

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier for a type that annotations can be attached to.
///
/// Identity comes from [`TypeId`]; the type name is carried along only for
/// display and diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for the type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Key for the type of `value`.
    pub fn of_val<T: ?Sized + 'static>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// Fully qualified type name, e.g. `my_app::model::User`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path, e.g. `User`.
    ///
    /// Names that do not start with a path (tuples, references, slices)
    /// are returned in full.
    pub fn short_name(&self) -> &'static str {
        let starts_with_path = self
            .name
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_');
        if !starts_with_path {
            return self.name;
        }
        // Generic arguments may contain paths of their own
        let base_len = self.name.find('<').unwrap_or(self.name.len());
        let base = &self.name[..base_len];
        match base.rfind("::") {
            Some(pos) => &self.name[pos + 2..],
            None => self.name,
        }
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Identifier distinguishing one kind of annotation from another.
///
/// Keys are compared by name, so each annotation kind should use a name no
/// other kind would pick. Define keys as `const` items next to the code that
/// owns them and keep them private to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnotationKey(&'static str);

impl AnnotationKey {
    /// Create a key from a static name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Get the key name.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AnnotationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
