//! Port definitions for the application layer

pub mod gateway;

pub use gateway::{
    AgentGateway, GatewayError, IntentRequest, IntentSuggestion, SaveAgentRequest, SavedMonitor,
};
