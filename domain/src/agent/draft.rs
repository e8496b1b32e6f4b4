//! The agent draft - the mutable aggregate the wizard builds.
//!
//! A draft is created with defaults when the wizard opens, repopulated
//! when a template is selected, and read-only once the plan is compiled
//! for review. It is owned exclusively by the active wizard instance.

use super::value_objects::{
    AnalysisParams, AutomationLevel, Cadence, EscalationTier, IntegrationSettings, SeverityLevel,
};
use crate::catalog::Template;
use crate::core::error::DomainError;
use crate::modules::DomainModuleConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many values of each scope dimension a fresh draft pre-selects.
const DEFAULT_SCOPE_VALUES: usize = 3;

/// How many domain actions a fresh draft enables.
const DEFAULT_ENABLED_ACTIONS: usize = 2;

/// The mutable agent configuration built through the wizard.
///
/// Invariants:
/// - there are always exactly four escalation tiers, with tier numbers
///   [1, 2, 3, 4] in order; only their `enabled` flag ever changes
/// - the action map is keyed exactly by the active domain's action keys;
///   applying a template's defaults resets it wholesale
/// - scope selections are keyed exactly by the active domain's dimension
///   keys; an empty selection means "match everything" at review time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDraft {
    pub name: String,
    pub description: String,
    pub cadence: Cadence,
    pub severity: SeverityLevel,
    pub enabled: bool,
    pub automation: AutomationLevel,
    /// Action key -> enabled, keyed by the active domain's action set
    pub automated_actions: BTreeMap<String, bool>,
    /// Dimension key -> selected values, keyed by the active domain's
    /// dimensions
    pub scope_selections: BTreeMap<String, Vec<String>>,
    pub integration: IntegrationSettings,
    pub analysis: AnalysisParams,
    #[serde(rename = "escalation_rules")]
    escalation_tiers: Vec<EscalationTier>,
}

impl Default for AgentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            cadence: Cadence::default(),
            severity: SeverityLevel::default(),
            enabled: true,
            automation: AutomationLevel::default(),
            automated_actions: BTreeMap::new(),
            scope_selections: BTreeMap::new(),
            integration: IntegrationSettings::default(),
            analysis: AnalysisParams::default(),
            escalation_tiers: EscalationTier::default_ladder(),
        }
    }
}

impl AgentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repopulate the draft from a template and its resolved module
    /// configuration.
    ///
    /// Deterministic and idempotent: applying the same template twice
    /// yields the same draft. Prior scope and action defaults are
    /// overwritten wholesale, so switching categories never leaves stale
    /// keys behind.
    pub fn apply_template_defaults(&mut self, template: &Template, config: &DomainModuleConfig) {
        self.name = template.name.clone();
        self.description = template.description.clone();
        self.cadence = template.default_cadence;
        self.severity = template.default_severity;
        self.automation = template.default_automation;
        self.integration.target_module = config.default_target_module().to_string();

        self.scope_selections = config
            .dimensions
            .iter()
            .map(|dimension| {
                let selected: Vec<String> = dimension
                    .values
                    .iter()
                    .take(DEFAULT_SCOPE_VALUES)
                    .cloned()
                    .collect();
                (dimension.key.clone(), selected)
            })
            .collect();

        self.automated_actions = config
            .actions
            .iter()
            .enumerate()
            .map(|(index, action)| (action.key.clone(), index < DEFAULT_ENABLED_ACTIONS))
            .collect();
    }

    /// Symmetric set toggle: add the value if absent, remove it if
    /// present. Unknown dimension keys are ignored so the selection map
    /// stays keyed by the active domain.
    pub fn toggle_scope_value(&mut self, dimension_key: &str, value: &str) {
        let Some(selected) = self.scope_selections.get_mut(dimension_key) else {
            return;
        };
        if let Some(position) = selected.iter().position(|v| v == value) {
            selected.remove(position);
        } else {
            selected.push(value.to_string());
        }
    }

    /// Replace a dimension's selection with every value it offers.
    pub fn select_all_scope(&mut self, dimension_key: &str, config: &DomainModuleConfig) {
        let Some(selected) = self.scope_selections.get_mut(dimension_key) else {
            return;
        };
        if let Some(dimension) = config.dimension(dimension_key) {
            *selected = dimension.values.clone();
        }
    }

    /// Clear a dimension's selection ("match everything" at review time).
    pub fn clear_scope(&mut self, dimension_key: &str) {
        if let Some(selected) = self.scope_selections.get_mut(dimension_key) {
            selected.clear();
        }
    }

    /// Flip one action's enabled flag. Unknown keys are ignored.
    pub fn toggle_action(&mut self, action_key: &str) {
        if let Some(enabled) = self.automated_actions.get_mut(action_key) {
            *enabled = !*enabled;
        }
    }

    /// Flip one escalation tier's enabled flag, leaving its tier number
    /// and hour band untouched. Out-of-range indices are ignored.
    pub fn toggle_escalation_tier(&mut self, index: usize) {
        if let Some(tier) = self.escalation_tiers.get_mut(index) {
            tier.enabled = !tier.enabled;
        }
    }

    /// The fixed four-tier escalation ladder.
    pub fn escalation_tiers(&self) -> &[EscalationTier] {
        &self.escalation_tiers
    }

    /// Count of currently enabled escalation tiers.
    pub fn enabled_tier_count(&self) -> usize {
        self.escalation_tiers.iter().filter(|t| t.enabled).count()
    }

    /// Keys of currently enabled actions, in map order.
    pub fn enabled_action_keys(&self) -> Vec<&str> {
        self.automated_actions
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Validation before the draft can leave the configuration step.
    ///
    /// Everything except the name is valid by construction (bounded
    /// selects and toggles), so the name is the only check.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::NameRequired);
        }
        Ok(())
    }
}
