//! Wire protocol for the remote Pulse service.
//!
//! Response envelopes all carry a `success` flag; a `false` value with a
//! 2xx status maps to [`GatewayError::Rejected`] at the gateway.
//!
//! [`GatewayError::Rejected`]: pulse_application::GatewayError::Rejected

use pulse_application::IntentSuggestion;
use pulse_domain::Template;
use serde::Deserialize;

/// `GET /api/v1/pulse/templates`
#[derive(Debug, Deserialize)]
pub struct TemplatesResponse {
    pub success: bool,
    #[serde(default)]
    pub templates: Vec<Template>,
}

/// `POST /api/v1/pulse/monitors/create`
#[derive(Debug, Deserialize)]
pub struct CreateMonitorResponse {
    pub success: bool,
    pub data: Option<CreateMonitorData>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateMonitorData {
    #[serde(default)]
    pub name: Option<String>,
    /// Suggested cadence as a wire string; unknown values are dropped
    #[serde(default)]
    pub suggested_frequency: Option<String>,
    #[serde(default)]
    pub suggested_severity: Option<String>,
    #[serde(default)]
    pub suggested_conditions: Option<SuggestedConditions>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestedConditions {
    #[serde(default)]
    pub condition: Option<String>,
}

impl CreateMonitorData {
    /// Convert the wire shape into the port's suggestion type, dropping
    /// values that do not parse rather than failing the call.
    pub fn into_suggestion(self) -> IntentSuggestion {
        IntentSuggestion {
            name: self.name,
            suggested_cadence: self.suggested_frequency.and_then(|s| s.parse().ok()),
            suggested_severity: self.suggested_severity.and_then(|s| s.parse().ok()),
            suggested_condition: self.suggested_conditions.and_then(|c| c.condition),
        }
    }
}

/// `POST /api/v1/pulse/monitors/save`
#[derive(Debug, Deserialize)]
pub struct SaveMonitorResponse {
    pub success: bool,
    #[serde(default)]
    pub monitor_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
