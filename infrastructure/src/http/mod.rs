//! HTTP adapter for the agent gateway port

pub mod gateway;
pub mod protocol;

pub use gateway::HttpAgentGateway;
