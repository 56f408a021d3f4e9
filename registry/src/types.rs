//! Type declaration types.

use propmark_core::TypeKey;

/// A type that can describe itself to the registry.
///
/// Implementing this trait is optional: annotations can be attached to any
/// `'static` type. Declared types get their property names checked on write
/// and can inherit annotations from a parent type.
pub trait Annotatable: 'static {
    /// Property names declared by the type. An empty list leaves the type open.
    fn properties() -> &'static [&'static str] {
        &[]
    }

    /// Parent type whose annotations this type inherits.
    fn parent() -> Option<TypeKey> {
        None
    }
}

/// Type declaration.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    /// The declared type.
    pub key: TypeKey,
    /// Declared property names (empty for an open type).
    pub properties: Vec<String>,
    /// Parent type (for inheritance).
    pub parent: Option<TypeKey>,
}

impl TypeDecl {
    pub fn new(key: TypeKey) -> Self {
        Self {
            key,
            properties: Vec::new(),
            parent: None,
        }
    }

    /// Build the declaration an [`Annotatable`] type gives of itself.
    pub fn of<T: Annotatable>() -> Self {
        let mut decl = Self::new(TypeKey::of::<T>());
        for property in T::properties() {
            decl = decl.with_property(*property);
        }
        if let Some(parent) = T::parent() {
            decl = decl.with_parent(parent);
        }
        decl
    }

    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.properties.contains(&name) {
            self.properties.push(name);
        }
        self
    }

    pub fn with_parent(mut self, parent: TypeKey) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Whether the declaration lists no properties.
    pub fn is_open(&self) -> bool {
        self.properties.is_empty()
    }

    /// Check if the type accepts annotations on a property.
    pub fn declares(&self, property: &str) -> bool {
        self.is_open() || self.properties.iter().any(|p| p == property)
    }
}
