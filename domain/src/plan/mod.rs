//! Execution plans and the plan compiler.
//!
//! An [`ExecutionPlan`] is the structured artifact the wizard exists to
//! produce: an ordered sequence of typed steps derived from a template
//! and a configuration draft. Plans are compiled, never edited.

pub mod compiler;
pub mod step;

pub use compiler::PlanCompiler;
pub use step::{ExecutionStep, StepKind};

use serde::{Deserialize, Serialize};

/// An ordered sequence of execution steps plus the natural-language
/// objective they were derived from.
///
/// Created once per compile invocation and treated as immutable output;
/// the review step and the save request consume it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    /// The originating natural-language objective
    pub objective: String,
    /// Steps in execution order
    pub steps: Vec<ExecutionStep>,
}

impl ExecutionPlan {
    pub fn new(objective: impl Into<String>, steps: Vec<ExecutionStep>) -> Self {
        Self {
            objective: objective.into(),
            steps,
        }
    }

    /// The step kinds in plan order.
    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(|s| s.kind).collect()
    }

    /// Whether the plan contains a step of the given kind.
    pub fn contains(&self, kind: StepKind) -> bool {
        self.steps.iter().any(|s| s.kind == kind)
    }

    /// First step of the given kind, if present.
    pub fn step(&self, kind: StepKind) -> Option<&ExecutionStep> {
        self.steps.iter().find(|s| s.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_accessors() {
        let plan = ExecutionPlan::new(
            "Watch coverage",
            vec![
                ExecutionStep::new(StepKind::Query, "Query", "pull data", "warehouse"),
                ExecutionStep::new(StepKind::Learn, "Learn", "feed back", "store"),
            ],
        );
        assert_eq!(plan.len(), 2);
        assert!(plan.contains(StepKind::Query));
        assert!(!plan.contains(StepKind::Execute));
        assert_eq!(plan.kinds(), vec![StepKind::Query, StepKind::Learn]);
        assert_eq!(plan.step(StepKind::Learn).unwrap().detail, "feed back");
    }
}
