//! Domain module registry.
//!
//! Maps each [`DomainCategory`] to its [`DomainModuleConfig`]. The
//! registry is constructed explicitly and injected into both the draft
//! defaults and the plan compiler, so the review summary and the compiled
//! plan always agree on the active vocabulary.

pub mod builtin;
pub mod config;

pub use config::{AutomatedAction, DomainModuleConfig, ScopeDimension};

use crate::catalog::DomainCategory;
use std::collections::HashMap;

/// Registry of per-category module configurations with a designated
/// default entry for unmapped categories.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    configs: HashMap<DomainCategory, DomainModuleConfig>,
    default: DomainModuleConfig,
}

impl ModuleRegistry {
    /// Registry over the built-in per-category configurations.
    pub fn builtin() -> Self {
        Self {
            configs: builtin::builtin_configs().into_iter().collect(),
            default: builtin::default_config(),
        }
    }

    /// Registry over explicit entries (fixtures in tests).
    pub fn new(
        configs: Vec<(DomainCategory, DomainModuleConfig)>,
        default: DomainModuleConfig,
    ) -> Self {
        Self {
            configs: configs.into_iter().collect(),
            default,
        }
    }

    /// Resolve the configuration for a category.
    ///
    /// Exact match on the category, else the designated default entry.
    /// Never fails.
    pub fn resolve(&self, category: DomainCategory) -> &DomainModuleConfig {
        self.configs.get(&category).unwrap_or(&self.default)
    }

    /// The designated default configuration.
    pub fn default_config(&self) -> &DomainModuleConfig {
        &self.default
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_category() {
        let registry = ModuleRegistry::builtin();
        let config = registry.resolve(DomainCategory::Stox);
        assert_eq!(config.scope_label, "Inventory scope");
        assert!(config.dimension("warehouses").is_some());
    }

    #[test]
    fn test_resolve_unmapped_category_falls_back() {
        let registry = ModuleRegistry::builtin();
        let config = registry.resolve(DomainCategory::General);
        assert_eq!(config, registry.default_config());
        assert_eq!(config.scope_label, "Data scope");
    }

    #[test]
    fn test_fixture_registry() {
        let registry = ModuleRegistry::new(
            vec![(DomainCategory::Ventas, builtin::ventas_config())],
            builtin::default_config(),
        );
        assert_eq!(
            registry.resolve(DomainCategory::Ventas).scope_label,
            "Sales scope"
        );
        // Stox has no entry in this fixture, so it resolves to the default
        assert_eq!(
            registry.resolve(DomainCategory::Stox),
            registry.default_config()
        );
    }
}
