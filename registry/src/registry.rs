//! The Registry - property annotation storage.

use crate::{Annotatable, RegistryConfig, RegistryError, RegistryResult, TypeDecl};
use propmark_core::{AnnotationKey, TypeKey, Value};
use std::collections::{BTreeMap, HashMap};

/// Annotation values by property name, then by annotation key.
type PropertyAnnotations = HashMap<String, HashMap<AnnotationKey, Value>>;

/// The Registry stores annotation values against `(type, property, key)`.
///
/// The last write for a given triple wins. Types may optionally be declared
/// with their property names and a parent type; reads on a declared type
/// fall back to its ancestors.
#[derive(Debug, Default)]
pub struct Registry {
    config: RegistryConfig,
    /// Annotation records by type.
    records: HashMap<TypeKey, PropertyAnnotations>,
    /// Type declarations by type.
    decls: HashMap<TypeKey, TypeDecl>,
}

impl Registry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    pub fn set_config(&mut self, config: RegistryConfig) {
        self.config = config;
    }

    // ==================== Declarations ====================

    /// Declare an [`Annotatable`] type.
    pub fn register<T: Annotatable>(&mut self) -> RegistryResult<()> {
        self.declare(TypeDecl::of::<T>())
    }

    /// Add or replace a type declaration.
    pub fn declare(&mut self, decl: TypeDecl) -> RegistryResult<()> {
        // Walk the would-be parent chain looking for the type itself
        let mut current = decl.parent;
        while let Some(ancestor) = current {
            if ancestor == decl.key {
                return Err(RegistryError::InheritanceCycle(decl.key.name().to_string()));
            }
            current = self.decls.get(&ancestor).and_then(|d| d.parent);
        }

        tracing::debug!(
            "Declared type {} with {} properties (parent: {:?})",
            decl.key,
            decl.properties.len(),
            decl.parent.map(|p| p.short_name())
        );
        self.decls.insert(decl.key, decl);
        Ok(())
    }

    /// Get a type declaration.
    pub fn decl(&self, key: TypeKey) -> Option<&TypeDecl> {
        self.decls.get(&key)
    }

    /// Check if `sub` is `super_type` or inherits from it.
    pub fn is_subtype(&self, sub: TypeKey, super_type: TypeKey) -> bool {
        self.lineage(sub).contains(&super_type)
    }

    /// The type followed by its ancestors, nearest first.
    fn lineage(&self, key: TypeKey) -> Vec<TypeKey> {
        let mut chain = vec![key];
        let mut current = self.decls.get(&key).and_then(|d| d.parent);
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = self.decls.get(&ancestor).and_then(|d| d.parent);
        }
        chain
    }

    /// Whether `property` is declared on `target` or any of its ancestors.
    /// Types with no declaration anywhere in their lineage accept everything.
    fn accepts(&self, target: TypeKey, property: &str) -> bool {
        let decls: Vec<&TypeDecl> = self
            .lineage(target)
            .iter()
            .filter_map(|key| self.decls.get(key))
            .collect();
        decls.is_empty() || decls.iter().any(|decl| decl.declares(property))
    }

    /// Types consulted on a read, nearest first.
    fn lookup_chain(&self, key: TypeKey) -> Vec<TypeKey> {
        if self.config.inherit {
            self.lineage(key)
        } else {
            vec![key]
        }
    }

    // ==================== Annotations ====================

    /// Record `value` under `key` for `(target, property)`.
    pub fn set(
        &mut self,
        target: TypeKey,
        property: &str,
        key: AnnotationKey,
        value: Value,
    ) -> RegistryResult<()> {
        if self.config.strict_properties && !self.accepts(target, property) {
            return Err(RegistryError::UnknownProperty {
                type_name: target.name().to_string(),
                property: property.to_string(),
            });
        }

        tracing::debug!("Annotating {}.{} with {} = {}", target, property, key, value);
        self.records
            .entry(target)
            .or_default()
            .entry(property.to_string())
            .or_default()
            .insert(key, value);
        Ok(())
    }

    /// Get the value stored under `key` for `(target, property)`,
    /// consulting ancestors when the type has none of its own.
    pub fn get(&self, target: TypeKey, property: &str, key: AnnotationKey) -> Option<&Value> {
        self.lookup_chain(target).into_iter().find_map(|owner| {
            self.records
                .get(&owner)
                .and_then(|props| props.get(property))
                .and_then(|values| values.get(&key))
        })
    }

    /// Like [`Registry::get`], falling back to `default` when nothing is stored.
    pub fn get_or(
        &self,
        target: TypeKey,
        property: &str,
        key: AnnotationKey,
        default: Value,
    ) -> Value {
        match self.get(target, property, key) {
            Some(value) => value.clone(),
            None => {
                tracing::trace!("No {} on {}.{}, using default {}", key, target, property, default);
                default
            }
        }
    }

    /// Check whether `(target, property)` has a value under `key`, inherited or own.
    pub fn has(&self, target: TypeKey, property: &str, key: AnnotationKey) -> bool {
        self.get(target, property, key).is_some()
    }

    /// All properties of `target` carrying `key`, with the value each resolves to.
    pub fn annotated_properties(
        &self,
        target: TypeKey,
        key: AnnotationKey,
    ) -> BTreeMap<&str, &Value> {
        let mut result = BTreeMap::new();
        // Nearest first, so a subtype's own value shadows an inherited one
        for owner in self.lookup_chain(target) {
            let Some(props) = self.records.get(&owner) else {
                continue;
            };
            for (property, values) in props {
                if let Some(value) = values.get(&key) {
                    result.entry(property.as_str()).or_insert(value);
                }
            }
        }
        result
    }

    /// Get the number of stored annotation values.
    pub fn len(&self) -> usize {
        self.records
            .values()
            .flat_map(|props| props.values())
            .map(|values| values.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all annotations and declarations. The configuration is kept.
    pub fn clear(&mut self) {
        self.records.clear();
        self.decls.clear();
    }
}
