//! HTTP gateway to the remote Pulse service

use super::protocol::{CreateMonitorResponse, SaveMonitorResponse, TemplatesResponse};
use async_trait::async_trait;
use pulse_application::ports::gateway::{
    AgentGateway, GatewayError, IntentRequest, IntentSuggestion, SaveAgentRequest, SavedMonitor,
};
use pulse_domain::Template;
use std::time::Duration;
use tracing::{debug, warn};

/// Gateway implementation over the Pulse REST API.
pub struct HttpAgentGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAgentGateway {
    /// Create a gateway with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_decode() {
        GatewayError::Decode(error.to_string())
    } else {
        GatewayError::Connection(error.to_string())
    }
}

fn check_status(status: reqwest::StatusCode) -> Result<(), GatewayError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(GatewayError::Status(status.as_u16()))
    }
}

#[async_trait]
impl AgentGateway for HttpAgentGateway {
    async fn load_templates(&self) -> Result<Vec<Template>, GatewayError> {
        let response = self
            .client
            .get(self.url("/api/v1/pulse/templates"))
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response.status())?;

        let body: TemplatesResponse = response.json().await.map_err(map_transport_error)?;
        if !body.success {
            return Err(GatewayError::Rejected("templates unavailable".to_string()));
        }
        debug!(count = body.templates.len(), "fetched remote templates");
        Ok(body.templates)
    }

    async fn interpret_intent(
        &self,
        request: &IntentRequest,
    ) -> Result<IntentSuggestion, GatewayError> {
        let response = self
            .client
            .post(self.url("/api/v1/pulse/monitors/create"))
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response.status())?;

        let body: CreateMonitorResponse = response.json().await.map_err(map_transport_error)?;
        if !body.success {
            let reason = body.error.unwrap_or_else(|| "intent rejected".to_string());
            warn!(%reason, "intent interpretation rejected");
            return Err(GatewayError::Rejected(reason));
        }
        Ok(body.data.unwrap_or_default().into_suggestion())
    }

    async fn save_agent(&self, request: &SaveAgentRequest) -> Result<SavedMonitor, GatewayError> {
        let response = self
            .client
            .post(self.url("/api/v1/pulse/monitors/save"))
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response.status())?;

        let body: SaveMonitorResponse = response.json().await.map_err(map_transport_error)?;
        match (body.success, body.monitor_id) {
            (true, Some(monitor_id)) => {
                debug!(%monitor_id, "agent saved");
                Ok(SavedMonitor { monitor_id })
            }
            (true, None) => Err(GatewayError::Decode(
                "save response missing monitor_id".to_string(),
            )),
            (false, _) => Err(GatewayError::Rejected(
                body.error.unwrap_or_else(|| "save rejected".to_string()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let gateway =
            HttpAgentGateway::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            gateway.url("/api/v1/pulse/templates"),
            "http://localhost:8000/api/v1/pulse/templates"
        );
    }
}
