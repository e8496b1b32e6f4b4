//! The agent authoring wizard - a three-step sequencer over the draft.
//!
//! `selecting → configuring → reviewing`, plus an implicit saving
//! sub-state during the final submit. Forward transitions validate their
//! preconditions; backward transitions never clear configuration.
//!
//! The wizard never strands the user on a dead network call: intent
//! interpretation falls back to a local compile and saving falls back to
//! a synthesized local identifier. Precondition errors are the only
//! errors surfaced to the user.

use crate::ports::gateway::{
    AgentGateway, IntentRequest, IntentSuggestion, SaveAgentRequest,
};
use chrono::Utc;
use pulse_domain::{
    AgentDraft, DomainCategory, DomainError, ExecutionPlan, ModuleRegistry, PlanCompiler,
    Template, TemplateCatalog,
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Model assigned to agents authored from a free-text objective.
const GENERIC_MODEL: &str = "pulse-generic-v1";

/// The wizard's current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Selecting,
    Configuring,
    Reviewing,
    /// Terminal: the agent was submitted
    Closed,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Selecting => "selecting",
            WizardStep::Configuring => "configuring",
            WizardStep::Reviewing => "reviewing",
            WizardStep::Closed => "closed",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Precondition errors surfaced inline to the user. Everything else the
/// wizard can hit degrades to a fallback instead of failing the flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Select a template or describe the agent")]
    SelectionRequired,

    #[error("Enter an agent name")]
    NameRequired,

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Operation not available while {0}")]
    OutOfSequence(WizardStep),
}

impl From<DomainError> for WizardError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NameRequired => WizardError::NameRequired,
            DomainError::UnknownTemplate(id) => WizardError::UnknownTemplate(id),
            DomainError::UnknownDimension(_) => WizardError::SelectionRequired,
        }
    }
}

/// Summary of the draft shown at the review step.
///
/// Built through the same module registry the compiler resolves, so the
/// summary and the compiled plan always agree on the active vocabulary.
#[derive(Debug, Clone)]
pub struct ReviewSummary {
    pub scope_label: String,
    /// One line per dimension: label plus the selection (or "All" when
    /// the selection is empty and matches everything)
    pub scope_lines: Vec<String>,
    /// Labels of enabled actions, in domain declaration order
    pub action_labels: Vec<String>,
    pub target_module: String,
    pub escalation_tiers_active: usize,
}

/// The wizard controller. Owns the draft for its lifetime; the draft is
/// mutable only during the configuring step.
pub struct AgentWizard<G: AgentGateway> {
    gateway: Arc<G>,
    catalog: TemplateCatalog,
    registry: ModuleRegistry,
    user_id: String,
    step: WizardStep,
    template: Option<Template>,
    objective: Option<String>,
    draft: AgentDraft,
    plan: Option<ExecutionPlan>,
}

impl<G: AgentGateway> AgentWizard<G> {
    pub fn new(
        gateway: Arc<G>,
        catalog: TemplateCatalog,
        registry: ModuleRegistry,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            catalog,
            registry,
            user_id: user_id.into(),
            step: WizardStep::Selecting,
            template: None,
            objective: None,
            draft: AgentDraft::new(),
            plan: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    pub fn draft(&self) -> &AgentDraft {
        &self.draft
    }

    /// Mutable access to the draft, only while configuring. Once the
    /// plan is compiled for review the draft is read-only.
    pub fn draft_mut(&mut self) -> Option<&mut AgentDraft> {
        match self.step {
            WizardStep::Configuring => Some(&mut self.draft),
            _ => None,
        }
    }

    /// The latest compiled plan, once one exists.
    pub fn plan(&self) -> Option<&ExecutionPlan> {
        self.plan.as_ref()
    }

    /// Best-effort catalog extension from the remote service. Failures
    /// have no user-visible effect: the built-in templates are always
    /// sufficient.
    pub async fn load_remote_templates(&mut self) {
        match self.gateway.load_templates().await {
            Ok(templates) => {
                debug!(count = templates.len(), "extending catalog with remote templates");
                self.catalog.extend(templates);
            }
            Err(error) => {
                debug!(%error, "remote template load failed; using built-ins");
            }
        }
    }

    /// Choose a template while selecting.
    pub fn select_template(&mut self, id: &str) -> Result<(), WizardError> {
        if self.step != WizardStep::Selecting {
            return Err(WizardError::OutOfSequence(self.step));
        }
        let template = self
            .catalog
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| WizardError::UnknownTemplate(id.to_string()))?;
        self.template = Some(template);
        Ok(())
    }

    pub fn clear_template(&mut self) {
        if self.step == WizardStep::Selecting {
            self.template = None;
        }
    }

    /// Describe the agent in free text instead of (or in addition to)
    /// choosing a template.
    pub fn set_objective(&mut self, text: impl Into<String>) {
        if self.step == WizardStep::Selecting {
            let text = text.into();
            self.objective = if text.trim().is_empty() {
                None
            } else {
                Some(text)
            };
        }
    }

    /// Advance one step. Forward transitions validate preconditions;
    /// once the precondition holds the transition always succeeds,
    /// falling back to local computation when the service is down.
    pub async fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Selecting => self.advance_to_configuring().await,
            WizardStep::Configuring => self.advance_to_reviewing(),
            step => Err(WizardError::OutOfSequence(step)),
        }
    }

    /// Move to the previous step without clearing configuration.
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::Configuring => WizardStep::Selecting,
            WizardStep::Reviewing => WizardStep::Configuring,
            step => step,
        };
    }

    async fn advance_to_configuring(&mut self) -> Result<WizardStep, WizardError> {
        let from_template = self.template.is_some();
        if !from_template && self.objective.is_none() {
            return Err(WizardError::SelectionRequired);
        }

        // A free-text objective gets a synthetic template in the general
        // category, so defaults and the compiler have one active template
        // either way.
        let template = match &self.template {
            Some(template) => template.clone(),
            None => {
                let objective = self.objective.clone().unwrap_or_default();
                Template::new(
                    "custom-objective",
                    "Custom agent",
                    DomainCategory::General,
                    GENERIC_MODEL,
                    objective,
                )
            }
        };

        let config = self.registry.resolve(template.category);
        self.draft.apply_template_defaults(&template, config);
        if let Some(objective) = &self.objective {
            self.draft.description = objective.clone();
        }

        let request = IntentRequest {
            user_id: self.user_id.clone(),
            natural_language: self.objective.clone().unwrap_or_else(|| {
                template
                    .example_query
                    .clone()
                    .unwrap_or_else(|| template.description.clone())
            }),
            name: (!self.draft.name.is_empty()).then(|| self.draft.name.clone()),
        };
        match self.gateway.interpret_intent(&request).await {
            Ok(suggestion) => {
                if !from_template {
                    self.apply_suggestion(suggestion);
                }
                info!("intent interpreted remotely");
            }
            Err(error) => {
                warn!(%error, "intent interpretation failed; compiling locally");
            }
        }

        self.template = Some(template);
        self.recompile();
        self.step = WizardStep::Configuring;
        Ok(self.step)
    }

    fn advance_to_reviewing(&mut self) -> Result<WizardStep, WizardError> {
        self.draft.validate()?;
        self.recompile();
        self.step = WizardStep::Reviewing;
        Ok(self.step)
    }

    /// Submit the reviewed agent. Save failures degrade to a synthesized
    /// local identifier; the wizard closes either way and returns the
    /// monitor id.
    pub async fn submit(&mut self) -> Result<String, WizardError> {
        if self.step != WizardStep::Reviewing {
            return Err(WizardError::OutOfSequence(self.step));
        }
        self.recompile();
        // The plan always exists after recompile; reviewing implies an
        // active template.
        let plan = self.plan.clone().unwrap_or_else(|| ExecutionPlan::new("", Vec::new()));

        let request = SaveAgentRequest {
            user_id: self.user_id.clone(),
            draft: self.draft.clone(),
            natural_language_query: plan.objective.clone(),
            execution_steps: plan.steps.clone(),
            data_source: self.data_source(),
        };

        let monitor_id = match self.gateway.save_agent(&request).await {
            Ok(saved) => {
                info!(monitor_id = %saved.monitor_id, "agent saved remotely");
                saved.monitor_id
            }
            Err(error) => {
                let local_id = format!("local-{}", Utc::now().timestamp_millis());
                warn!(%error, %local_id, "save failed; closing with local identifier");
                local_id
            }
        };

        self.step = WizardStep::Closed;
        Ok(monitor_id)
    }

    /// The review-step summary, resolved through the same registry the
    /// compiler uses.
    pub fn review_summary(&self) -> ReviewSummary {
        let category = self
            .template
            .as_ref()
            .map(|t| t.category)
            .unwrap_or_default();
        let config = self.registry.resolve(category);

        let scope_lines = config
            .dimensions
            .iter()
            .map(|dimension| {
                let selected = self
                    .draft
                    .scope_selections
                    .get(&dimension.key)
                    .filter(|values| !values.is_empty());
                match selected {
                    Some(values) => format!("{}: {}", dimension.label, values.join(", ")),
                    // Empty selection matches everything
                    None => format!("{}: All", dimension.label),
                }
            })
            .collect();

        let action_labels = config
            .actions
            .iter()
            .filter(|action| {
                self.draft
                    .automated_actions
                    .get(&action.key)
                    .copied()
                    .unwrap_or(false)
            })
            .map(|action| action.label.clone())
            .collect();

        ReviewSummary {
            scope_label: config.scope_label.clone(),
            scope_lines,
            action_labels,
            target_module: self.draft.integration.target_module.clone(),
            escalation_tiers_active: self.draft.enabled_tier_count(),
        }
    }

    fn recompile(&mut self) {
        if let Some(template) = &self.template {
            let compiler = PlanCompiler::new(&self.registry);
            self.plan = Some(compiler.compile(template, &self.draft));
        }
    }

    /// Where the agent's source data comes from: the detection pattern
    /// for pattern-backed templates, else the domain's first integration
    /// module.
    fn data_source(&self) -> String {
        match &self.template {
            Some(template) => template.pattern_source.clone().unwrap_or_else(|| {
                self.registry
                    .resolve(template.category)
                    .default_target_module()
                    .to_string()
            }),
            None => String::new(),
        }
    }

    fn apply_suggestion(&mut self, suggestion: IntentSuggestion) {
        if let Some(name) = suggestion.name {
            self.draft.name = name;
        }
        if let Some(cadence) = suggestion.suggested_cadence {
            self.draft.cadence = cadence;
        }
        if let Some(severity) = suggestion.suggested_severity {
            self.draft.severity = severity;
        }
        if let Some(condition) = suggestion.suggested_condition {
            self.draft.description = condition;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::gateway::{GatewayError, SavedMonitor};
    use async_trait::async_trait;
    use pulse_domain::{Cadence, SeverityLevel, StepKind};
    use std::sync::Mutex;

    /// Gateway whose every call fails, exercising the fallback paths.
    struct DownGateway;

    #[async_trait]
    impl AgentGateway for DownGateway {
        async fn load_templates(&self) -> Result<Vec<Template>, GatewayError> {
            Err(GatewayError::Connection("refused".to_string()))
        }

        async fn interpret_intent(
            &self,
            _request: &IntentRequest,
        ) -> Result<IntentSuggestion, GatewayError> {
            Err(GatewayError::Timeout)
        }

        async fn save_agent(
            &self,
            _request: &SaveAgentRequest,
        ) -> Result<SavedMonitor, GatewayError> {
            Err(GatewayError::Status(503))
        }
    }

    /// Gateway that answers successfully and records save payloads.
    struct ScriptedGateway {
        templates: Vec<Template>,
        suggestion: IntentSuggestion,
        saved: Mutex<Vec<SaveAgentRequest>>,
    }

    impl ScriptedGateway {
        fn new(suggestion: IntentSuggestion) -> Self {
            Self {
                templates: Vec::new(),
                suggestion,
                saved: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AgentGateway for ScriptedGateway {
        async fn load_templates(&self) -> Result<Vec<Template>, GatewayError> {
            Ok(self.templates.clone())
        }

        async fn interpret_intent(
            &self,
            _request: &IntentRequest,
        ) -> Result<IntentSuggestion, GatewayError> {
            Ok(self.suggestion.clone())
        }

        async fn save_agent(
            &self,
            request: &SaveAgentRequest,
        ) -> Result<SavedMonitor, GatewayError> {
            self.saved.lock().unwrap().push(request.clone());
            Ok(SavedMonitor {
                monitor_id: "mon-42".to_string(),
            })
        }
    }

    fn wizard<G: AgentGateway>(gateway: G) -> AgentWizard<G> {
        AgentWizard::new(
            Arc::new(gateway),
            TemplateCatalog::builtin(),
            ModuleRegistry::builtin(),
            "user-1",
        )
    }

    #[tokio::test]
    async fn test_selection_precondition_blocks_advance() {
        let mut wizard = wizard(DownGateway);
        assert_eq!(wizard.next().await, Err(WizardError::SelectionRequired));
        assert_eq!(wizard.step(), WizardStep::Selecting);
    }

    #[tokio::test]
    async fn test_template_flow_reaches_review_despite_dead_network() {
        let mut wizard = wizard(DownGateway);
        wizard.load_remote_templates().await; // swallowed failure

        wizard.select_template("stockout-risk").unwrap();
        assert_eq!(wizard.next().await, Ok(WizardStep::Configuring));

        // Defaults applied and a plan compiled locally despite the failed
        // intent call
        assert_eq!(wizard.draft().name, "Stockout risk monitor");
        assert!(wizard.plan().is_some());

        assert_eq!(wizard.next().await, Ok(WizardStep::Reviewing));
        let plan = wizard.plan().unwrap();
        assert!(plan.contains(StepKind::Detect));
    }

    #[tokio::test]
    async fn test_submit_synthesizes_local_id_on_save_failure() {
        let mut wizard = wizard(DownGateway);
        wizard.select_template("margin-erosion").unwrap();
        wizard.next().await.unwrap();
        wizard.next().await.unwrap();

        let monitor_id = wizard.submit().await.unwrap();
        assert!(monitor_id.starts_with("local-"));
        assert_eq!(wizard.step(), WizardStep::Closed);
    }

    #[tokio::test]
    async fn test_objective_flow_seeds_suggestions() {
        let suggestion = IntentSuggestion {
            name: Some("Coverage guard".to_string()),
            suggested_cadence: Some(Cadence::Hourly),
            suggested_severity: Some(SeverityLevel::Critical),
            suggested_condition: Some("coverage below 10 days".to_string()),
        };
        let mut wizard = wizard(ScriptedGateway::new(suggestion));
        wizard.set_objective("Warn me when coverage drops below 10 days");

        assert_eq!(wizard.next().await, Ok(WizardStep::Configuring));
        assert_eq!(wizard.draft().name, "Coverage guard");
        assert_eq!(wizard.draft().cadence, Cadence::Hourly);
        assert_eq!(wizard.draft().severity, SeverityLevel::Critical);
        assert_eq!(wizard.template().unwrap().id, "custom-objective");
    }

    #[tokio::test]
    async fn test_suggestions_do_not_override_chosen_template() {
        let suggestion = IntentSuggestion {
            name: Some("Should not apply".to_string()),
            ..Default::default()
        };
        let mut wizard = wizard(ScriptedGateway::new(suggestion));
        wizard.select_template("stockout-risk").unwrap();
        wizard.next().await.unwrap();
        assert_eq!(wizard.draft().name, "Stockout risk monitor");
    }

    #[tokio::test]
    async fn test_name_validation_blocks_review() {
        let mut wizard = wizard(DownGateway);
        wizard.select_template("stockout-risk").unwrap();
        wizard.next().await.unwrap();

        wizard.draft_mut().unwrap().name.clear();
        assert_eq!(wizard.next().await, Err(WizardError::NameRequired));
        assert_eq!(wizard.step(), WizardStep::Configuring);

        wizard.draft_mut().unwrap().name = "Coverage guard".to_string();
        assert_eq!(wizard.next().await, Ok(WizardStep::Reviewing));
    }

    #[tokio::test]
    async fn test_back_preserves_configuration() {
        let mut wizard = wizard(DownGateway);
        wizard.select_template("stockout-risk").unwrap();
        wizard.next().await.unwrap();

        wizard.draft_mut().unwrap().toggle_action("flag_obsolete");
        wizard.next().await.unwrap();
        assert_eq!(wizard.step(), WizardStep::Reviewing);

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Configuring);
        assert_eq!(wizard.draft().automated_actions["flag_obsolete"], true);

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Selecting);
        assert_eq!(wizard.template().unwrap().id, "stockout-risk");
    }

    #[tokio::test]
    async fn test_draft_is_read_only_outside_configuring() {
        let mut wizard = wizard(DownGateway);
        assert!(wizard.draft_mut().is_none());

        wizard.select_template("stockout-risk").unwrap();
        wizard.next().await.unwrap();
        assert!(wizard.draft_mut().is_some());

        wizard.next().await.unwrap();
        assert!(wizard.draft_mut().is_none());
    }

    #[tokio::test]
    async fn test_save_payload_carries_plan_and_data_source() {
        let gateway = Arc::new(ScriptedGateway::new(IntentSuggestion::default()));
        let mut wizard = AgentWizard::new(
            Arc::clone(&gateway),
            TemplateCatalog::builtin(),
            ModuleRegistry::builtin(),
            "user-1",
        );
        wizard.select_template("stockout-risk").unwrap();
        wizard.next().await.unwrap();
        wizard.next().await.unwrap();

        let monitor_id = wizard.submit().await.unwrap();
        assert_eq!(monitor_id, "mon-42");

        let saved = gateway.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        let request = &saved[0];
        assert_eq!(request.user_id, "user-1");
        assert_eq!(request.data_source, "stockout_patterns");
        assert!(!request.execution_steps.is_empty());
        // Template flow: the objective is the draft description seeded
        // from the template
        assert_eq!(request.natural_language_query, wizard.draft().description);
    }

    #[tokio::test]
    async fn test_review_summary_matches_compiler_vocabulary() {
        let mut wizard = wizard(DownGateway);
        wizard.select_template("stockout-risk").unwrap();
        wizard.next().await.unwrap();

        wizard.draft_mut().unwrap().clear_scope("warehouses");
        let summary = wizard.review_summary();

        assert_eq!(summary.scope_label, "Inventory scope");
        assert!(summary
            .scope_lines
            .iter()
            .any(|line| line == "Warehouses: All"));
        assert_eq!(
            summary.action_labels,
            vec!["Create purchase order", "Adjust safety stock"]
        );
        assert_eq!(summary.escalation_tiers_active, 3);
    }

    #[tokio::test]
    async fn test_submit_out_of_sequence() {
        let mut wizard = wizard(DownGateway);
        assert_eq!(
            wizard.submit().await,
            Err(WizardError::OutOfSequence(WizardStep::Selecting))
        );
    }
}
