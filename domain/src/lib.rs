//! Domain layer for pulse-agents
//!
//! This crate contains the core business logic of the agent authoring
//! pipeline. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Templates and domains
//!
//! The [`catalog::TemplateCatalog`] holds agent templates, each tagged
//! with a [`catalog::DomainCategory`]. The [`modules::ModuleRegistry`]
//! maps each category to its vocabulary: scope dimensions, automatable
//! actions, and integration modules.
//!
//! ## Draft and plan
//!
//! The wizard mutates an [`agent::AgentDraft`] and the
//! [`plan::PlanCompiler`] derives an ordered [`plan::ExecutionPlan`] from
//! the template plus the draft. The compiler is a pure function: all step
//! inclusion and ordering rules live there, and compiling the same
//! snapshot twice yields an identical plan.

pub mod agent;
pub mod catalog;
pub mod core;
pub mod modules;
pub mod plan;

// Re-export commonly used types
pub use agent::{
    draft::AgentDraft,
    value_objects::{
        AnalysisDepth, AnalysisParams, AutomationLevel, Cadence, EscalationTier,
        IntegrationSettings, SeverityLevel, WritebackMode, ESCALATION_TIER_COUNT,
    },
};
pub use catalog::{DomainCategory, Template, TemplateCatalog};
pub use core::error::DomainError;
pub use modules::{AutomatedAction, DomainModuleConfig, ModuleRegistry, ScopeDimension};
pub use plan::{ExecutionPlan, ExecutionStep, PlanCompiler, StepKind};
