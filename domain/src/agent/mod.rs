//! Agent configuration domain

pub mod draft;
pub mod value_objects;

pub use draft::AgentDraft;
pub use value_objects::{
    AnalysisDepth, AnalysisParams, AutomationLevel, Cadence, EscalationTier, IntegrationSettings,
    SeverityLevel, WritebackMode, ESCALATION_TIER_COUNT, MAX_CONFIDENCE, MIN_CONFIDENCE,
};
