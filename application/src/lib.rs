//! Application layer for pulse-agents
//!
//! This crate contains the wizard use case and the gateway port
//! definitions. It depends only on the domain layer; the network
//! adapters live in the infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::gateway::{
    AgentGateway, GatewayError, IntentRequest, IntentSuggestion, SaveAgentRequest, SavedMonitor,
};
pub use use_cases::wizard::{AgentWizard, ReviewSummary, WizardError, WizardStep};
