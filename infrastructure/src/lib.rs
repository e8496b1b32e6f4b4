//! Infrastructure layer for pulse-agents
//!
//! This crate contains the adapters behind the application ports: the
//! HTTP gateway to the remote Pulse service, the offline gateway, and
//! configuration file loading.

pub mod config;
pub mod http;
pub mod offline;

// Re-export commonly used types
pub use config::{ApiConfig, ConfigLoader, FileConfig};
pub use http::HttpAgentGateway;
pub use offline::OfflineGateway;
