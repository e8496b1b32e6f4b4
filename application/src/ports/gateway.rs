//! Agent gateway port
//!
//! Defines the interface for the remote Pulse service that extends the
//! template catalog, interprets free-text intent, and persists agents.
//! Implementations (adapters) live in the infrastructure layer.
//!
//! Every operation is modeled as an explicit `Result` at the boundary so
//! the fallback paths (local compile, synthesized identifier) are written
//! once in the wizard and tested against fake gateways.

use async_trait::async_trait;
use pulse_domain::{
    AgentDraft, Cadence, ExecutionStep, SeverityLevel, Template,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Request to interpret a free-text monitoring objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRequest {
    pub user_id: String,
    pub natural_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Suggestions returned by intent interpretation, used to seed the draft
/// when no template was chosen. Every field is optional; absent fields
/// leave the draft untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentSuggestion {
    pub name: Option<String>,
    pub suggested_cadence: Option<Cadence>,
    pub suggested_severity: Option<SeverityLevel>,
    pub suggested_condition: Option<String>,
}

/// The full payload persisted when the wizard submits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAgentRequest {
    pub user_id: String,
    #[serde(flatten)]
    pub draft: AgentDraft,
    pub natural_language_query: String,
    pub execution_steps: Vec<ExecutionStep>,
    pub data_source: String,
}

/// A successfully persisted agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedMonitor {
    pub monitor_id: String,
}

/// Gateway to the remote Pulse service
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Fetch remotely defined templates to extend the built-in catalog.
    /// Best-effort: callers tolerate failure silently.
    async fn load_templates(&self) -> Result<Vec<Template>, GatewayError>;

    /// Interpret a free-text objective into configuration suggestions.
    async fn interpret_intent(
        &self,
        request: &IntentRequest,
    ) -> Result<IntentSuggestion, GatewayError>;

    /// Persist a finished agent definition.
    async fn save_agent(&self, request: &SaveAgentRequest) -> Result<SavedMonitor, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_request_omits_absent_name() {
        let request = IntentRequest {
            user_id: "u1".to_string(),
            natural_language: "watch coverage".to_string(),
            name: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("name"));
    }

    #[test]
    fn test_save_request_flattens_draft() {
        let request = SaveAgentRequest {
            user_id: "u1".to_string(),
            draft: AgentDraft::new(),
            natural_language_query: "watch coverage".to_string(),
            execution_steps: Vec::new(),
            data_source: "inventory".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        // Draft fields sit at the top level of the payload
        assert!(value.get("cadence").is_some());
        assert!(value.get("automation").is_some());
        assert!(value.get("natural_language_query").is_some());
    }
}
