//! Offline gateway adapter.
//!
//! Every call fails with a connection error, which exercises the same
//! fallback paths a dead network does: built-in templates, local plan
//! compilation, and a synthesized monitor identifier. Selected by the
//! `--offline` flag or the `offline` config key.

use async_trait::async_trait;
use pulse_application::ports::gateway::{
    AgentGateway, GatewayError, IntentRequest, IntentSuggestion, SaveAgentRequest, SavedMonitor,
};
use pulse_domain::Template;

/// Gateway used when no remote service should be contacted.
#[derive(Debug, Default)]
pub struct OfflineGateway;

impl OfflineGateway {
    pub fn new() -> Self {
        Self
    }

    fn error() -> GatewayError {
        GatewayError::Connection("offline mode".to_string())
    }
}

#[async_trait]
impl AgentGateway for OfflineGateway {
    async fn load_templates(&self) -> Result<Vec<Template>, GatewayError> {
        Err(Self::error())
    }

    async fn interpret_intent(
        &self,
        _request: &IntentRequest,
    ) -> Result<IntentSuggestion, GatewayError> {
        Err(Self::error())
    }

    async fn save_agent(&self, _request: &SaveAgentRequest) -> Result<SavedMonitor, GatewayError> {
        Err(Self::error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_call_fails() {
        let gateway = OfflineGateway::new();
        assert!(gateway.load_templates().await.is_err());
        let request = IntentRequest {
            user_id: "u1".to_string(),
            natural_language: "watch coverage".to_string(),
            name: None,
        };
        assert!(gateway.interpret_intent(&request).await.is_err());
    }
}
