//! Per-domain module configuration - the vocabulary of an agent in a
//! category: what can be scoped, what can be automated, and which
//! integration modules supply or receive data.

use serde::{Deserialize, Serialize};

/// One filterable dimension of an agent's scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeDimension {
    /// Display label (e.g. "Products")
    pub label: String,
    /// Machine key used in scope selections
    pub key: String,
    /// Accent identifier the UI uses for this dimension
    pub accent: String,
    /// Selectable values
    pub values: Vec<String>,
}

impl ScopeDimension {
    pub fn new(
        label: impl Into<String>,
        key: impl Into<String>,
        accent: impl Into<String>,
        values: Vec<&str>,
    ) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            accent: accent.into(),
            values: values.into_iter().map(String::from).collect(),
        }
    }
}

/// An action the agent can carry out automatically in this domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatedAction {
    /// Machine key used in the draft's action map
    pub key: String,
    /// Display label
    pub label: String,
    /// What the action does
    pub description: String,
}

impl AutomatedAction {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// The complete vocabulary for one domain category.
///
/// Immutable: one entry per category, created at registry construction
/// and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainModuleConfig {
    /// Label the UI shows over the scope section
    pub scope_label: String,
    /// Filterable scope dimensions, in display order
    pub dimensions: Vec<ScopeDimension>,
    /// Automatable actions, in display order
    pub actions: Vec<AutomatedAction>,
    /// Integration modules valid for this domain
    pub integration_modules: Vec<String>,
}

impl DomainModuleConfig {
    /// Look a dimension up by its machine key.
    pub fn dimension(&self, key: &str) -> Option<&ScopeDimension> {
        self.dimensions.iter().find(|d| d.key == key)
    }

    /// Look an action up by its machine key.
    pub fn action(&self, key: &str) -> Option<&AutomatedAction> {
        self.actions.iter().find(|a| a.key == key)
    }

    /// The default target module: first integration module, if any.
    pub fn default_target_module(&self) -> &str {
        self.integration_modules
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DomainModuleConfig {
        DomainModuleConfig {
            scope_label: "Inventory scope".to_string(),
            dimensions: vec![ScopeDimension::new(
                "Products",
                "products",
                "emerald",
                vec!["Raw materials", "Finished goods"],
            )],
            actions: vec![AutomatedAction::new(
                "create_po",
                "Create purchase order",
                "Draft a replenishment order for the flagged SKU",
            )],
            integration_modules: vec!["inventory".to_string(), "purchasing".to_string()],
        }
    }

    #[test]
    fn test_dimension_lookup() {
        let config = config();
        assert!(config.dimension("products").is_some());
        assert!(config.dimension("regions").is_none());
    }

    #[test]
    fn test_action_lookup() {
        let config = config();
        assert_eq!(
            config.action("create_po").unwrap().label,
            "Create purchase order"
        );
        assert!(config.action("missing").is_none());
    }

    #[test]
    fn test_default_target_module() {
        assert_eq!(config().default_target_module(), "inventory");
    }
}
