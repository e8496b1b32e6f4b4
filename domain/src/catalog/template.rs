//! Agent templates and their domain categories

use crate::agent::value_objects::{AutomationLevel, Cadence, SeverityLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain category an agent template belongs to.
///
/// Categories are a closed set; templates fetched from the remote catalog
/// may still carry a category this build does not know, which deserializes
/// to [`DomainCategory::General`] and resolves to the default module
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainCategory {
    /// Inventory and stock coverage
    Stox,
    /// Margin and pricing
    Margen,
    /// Sales performance
    Ventas,
    /// Cash and finance
    Finanzas,
    /// Catch-all for unmapped categories
    #[default]
    #[serde(other)]
    General,
}

impl DomainCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainCategory::Stox => "stox",
            DomainCategory::Margen => "margen",
            DomainCategory::Ventas => "ventas",
            DomainCategory::Finanzas => "finanzas",
            DomainCategory::General => "general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DomainCategory::Stox => "Inventory",
            DomainCategory::Margen => "Margins & Pricing",
            DomainCategory::Ventas => "Sales",
            DomainCategory::Finanzas => "Finance",
            DomainCategory::General => "General",
        }
    }

    /// All known categories, in catalog display order.
    pub fn all() -> &'static [DomainCategory] {
        &[
            DomainCategory::Stox,
            DomainCategory::Margen,
            DomainCategory::Ventas,
            DomainCategory::Finanzas,
            DomainCategory::General,
        ]
    }
}

impl fmt::Display for DomainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DomainCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stox" => Ok(DomainCategory::Stox),
            "margen" => Ok(DomainCategory::Margen),
            "ventas" => Ok(DomainCategory::Ventas),
            "finanzas" => Ok(DomainCategory::Finanzas),
            "general" => Ok(DomainCategory::General),
            _ => Err(format!("Invalid domain category: {}", s)),
        }
    }
}

/// An agent template from the catalog.
///
/// Templates are immutable: they are created at catalog load time and
/// only ever read afterwards. Selecting one seeds an agent draft with its
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Stable identifier used for selection and dedup
    pub id: String,
    /// Display name
    pub name: String,
    /// Domain category driving the module vocabulary
    pub category: DomainCategory,
    /// Default scheduling cadence
    pub default_cadence: Cadence,
    /// Default finding severity
    pub default_severity: SeverityLevel,
    /// Default autonomy level
    pub default_automation: AutomationLevel,
    /// Analysis model this template runs
    pub model: String,
    /// Human-readable description
    pub description: String,
    /// Optional natural-language example query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_query: Option<String>,
    /// Set when the template originates from a pre-computed detection
    /// pattern rather than a generic catalog entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_source: Option<String>,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: DomainCategory,
        model: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            default_cadence: Cadence::default(),
            default_severity: SeverityLevel::default(),
            default_automation: AutomationLevel::default(),
            model: model.into(),
            description: description.into(),
            example_query: None,
            pattern_source: None,
        }
    }

    pub fn with_defaults(
        mut self,
        cadence: Cadence,
        severity: SeverityLevel,
        automation: AutomationLevel,
    ) -> Self {
        self.default_cadence = cadence;
        self.default_severity = severity;
        self.default_automation = automation;
        self
    }

    pub fn with_example_query(mut self, query: impl Into<String>) -> Self {
        self.example_query = Some(query.into());
        self
    }

    pub fn with_pattern_source(mut self, source: impl Into<String>) -> Self {
        self.pattern_source = Some(source.into());
        self
    }

    /// Whether this template scans a pre-computed detection source.
    pub fn is_pattern_backed(&self) -> bool {
        self.pattern_source.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        assert_eq!(
            "stox".parse::<DomainCategory>().ok(),
            Some(DomainCategory::Stox)
        );
        assert_eq!(DomainCategory::Margen.as_str(), "margen");
        assert!("hr".parse::<DomainCategory>().is_err());
    }

    #[test]
    fn test_unknown_category_deserializes_to_general() {
        let json = r#""procurement""#;
        let category: DomainCategory = serde_json::from_str(json).unwrap();
        assert_eq!(category, DomainCategory::General);
    }

    #[test]
    fn test_template_builder() {
        let template = Template::new(
            "stockout-risk",
            "Stockout risk monitor",
            DomainCategory::Stox,
            "pulse-stockout-v2",
            "Watches coverage days and flags SKUs at risk of stocking out",
        )
        .with_defaults(
            Cadence::Daily,
            SeverityLevel::High,
            AutomationLevel::Recommend,
        )
        .with_pattern_source("stockout_patterns");

        assert_eq!(template.id, "stockout-risk");
        assert!(template.is_pattern_backed());
        assert_eq!(template.default_severity, SeverityLevel::High);
    }

    #[test]
    fn test_template_decodes_without_optional_fields() {
        let json = r#"{
            "id": "t1",
            "name": "T1",
            "category": "ventas",
            "default_cadence": "daily",
            "default_severity": "medium",
            "default_automation": "recommend",
            "model": "pulse-generic-v1",
            "description": "d"
        }"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.category, DomainCategory::Ventas);
        assert!(template.example_query.is_none());
        assert!(!template.is_pattern_backed());
    }
}
