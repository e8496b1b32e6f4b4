//! The execution plan compiler.
//!
//! A pure function from template + draft to an ordered step sequence.
//! All inclusion and ordering rules live here; the presentation layer
//! only renders the output.
//!
//! Fixed step order with conditional inclusion:
//!
//! | # | Step          | Included when                                    |
//! |---|---------------|--------------------------------------------------|
//! | 1 | detect/query  | always, exactly one of the two                   |
//! | 2 | analyze       | always                                           |
//! | 3 | decide        | always                                           |
//! | 4 | simulate      | automation is simulate or execute                |
//! | 5 | approve       | approval required OR automation is not execute   |
//! | 6 | execute       | automation is simulate or execute                |
//! | 7 | notify        | always                                           |
//! | 8 | learn         | always, last                                     |
//!
//! Plans therefore hold between six and eight steps: the approval gate is
//! absent only for execute-level automation with the approval flag
//! explicitly disabled. Compilation never fails:
//! an unmapped category resolves to the default module configuration and
//! yields generic step text.

use super::step::{ExecutionStep, StepKind};
use super::ExecutionPlan;
use crate::agent::AgentDraft;
use crate::catalog::Template;
use crate::modules::ModuleRegistry;

/// Compiles execution plans against an injected module registry.
///
/// The registry is shared with the review summary so the compiled plan
/// and the UI always agree on the active vocabulary.
pub struct PlanCompiler<'a> {
    registry: &'a ModuleRegistry,
}

impl<'a> PlanCompiler<'a> {
    pub fn new(registry: &'a ModuleRegistry) -> Self {
        Self { registry }
    }

    /// Derive the execution plan for a template and configuration draft.
    ///
    /// Deterministic: the same template and draft snapshot always produce
    /// an identical plan.
    pub fn compile(&self, template: &Template, draft: &AgentDraft) -> ExecutionPlan {
        let config = self.registry.resolve(template.category);
        let mut steps = Vec::with_capacity(8);

        // 1. Exactly one of detect/query opens the plan
        if let Some(source) = &template.pattern_source {
            steps.push(ExecutionStep::new(
                StepKind::Detect,
                "Detect",
                format!("Scan the {} detection tables for new matches", source),
                "Pulse detection engine",
            ));
        } else {
            steps.push(ExecutionStep::new(
                StepKind::Query,
                "Query",
                format!(
                    "Pull source data from the {} modules",
                    config.integration_modules.join(", ")
                ),
                "Data warehouse",
            ));
        }

        // 2. Analyze
        steps.push(ExecutionStep::new(
            StepKind::Analyze,
            "Analyze",
            format!(
                "Run {} at {}% confidence over a {}-day lookback",
                template.model, draft.analysis.confidence_threshold, draft.analysis.lookback_days
            ),
            "Pulse analysis service",
        ));

        // 3. Decide
        steps.push(ExecutionStep::new(
            StepKind::Decide,
            "Decide",
            format!(
                "Evaluate findings against {} severity thresholds on a {} cadence",
                draft.severity,
                draft.cadence.display_name().to_lowercase()
            ),
            "Rule engine",
        ));

        // 4. Simulate
        if draft.automation.includes_simulation() {
            steps.push(ExecutionStep::new(
                StepKind::Simulate,
                "Simulate",
                format!(
                    "Dry-run the proposed actions against a snapshot of the {} module",
                    target_module_name(draft, config)
                ),
                "Simulation sandbox",
            ));
        }

        // 5. Approve - omitted only for execute-level automation with the
        // approval flag explicitly disabled
        if draft.integration.approval_required || !draft.automation.reaches_execution() {
            steps.push(ExecutionStep::new(
                StepKind::Approve,
                "Approve",
                "Hold proposed actions until a reviewer approves them",
                "Workflow inbox",
            ));
        }

        // 6. Execute - simulate still exercises this step in preview form
        if draft.automation.includes_simulation() {
            let labels: Vec<&str> = config
                .actions
                .iter()
                .filter(|action| draft.automated_actions.get(&action.key).copied().unwrap_or(false))
                .map(|action| action.label.as_str())
                .collect();
            let detail = if labels.is_empty() {
                "Apply the recommended actions to the target module".to_string()
            } else {
                format!("Carry out enabled actions: {}", labels.join(", "))
            };
            steps.push(ExecutionStep::new(
                StepKind::Execute,
                "Execute",
                detail,
                format!("ERP connector: {}", target_module_name(draft, config)),
            ));
        }

        // 7. Notify
        let tiers = draft.enabled_tier_count();
        let tier_text = if tiers == 1 {
            "1 escalation tier active".to_string()
        } else {
            format!("{} escalation tiers active", tiers)
        };
        steps.push(ExecutionStep::new(
            StepKind::Notify,
            "Notify",
            format!("Notify owners and work the escalation ladder: {}", tier_text),
            "Email + in-app",
        ));

        // 8. Learn, always last
        steps.push(ExecutionStep::new(
            StepKind::Learn,
            "Learn",
            format!("Record outcomes and feed them back to improve {}", template.model),
            "Model feedback store",
        ));

        ExecutionPlan::new(objective_for(template, draft), steps)
    }
}

/// The module the execute and simulate steps address: the draft's target
/// module when set, else the domain's first integration module.
fn target_module_name<'c>(
    draft: &'c AgentDraft,
    config: &'c crate::modules::DomainModuleConfig,
) -> &'c str {
    if draft.integration.target_module.is_empty() {
        config.default_target_module()
    } else {
        &draft.integration.target_module
    }
}

/// The plan's natural-language objective: the draft description when the
/// user wrote one, else the template's example query, else its
/// description.
fn objective_for(template: &Template, draft: &AgentDraft) -> String {
    if !draft.description.trim().is_empty() {
        return draft.description.clone();
    }
    template
        .example_query
        .clone()
        .unwrap_or_else(|| template.description.clone())
}
