//! Application use cases

pub mod wizard;

pub use wizard::{AgentWizard, ReviewSummary, WizardError, WizardStep};
