//! Registry configuration.

/// Behavior switches for a [`crate::Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Reads that miss on a type fall back to its parent chain.
    pub inherit: bool,
    /// Writes to a declared type must name a declared property.
    pub strict_properties: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            inherit: true,
            strict_properties: true,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inherit(mut self, inherit: bool) -> Self {
        self.inherit = inherit;
        self
    }

    pub fn strict_properties(mut self, strict: bool) -> Self {
        self.strict_properties = strict;
        self
    }
}
