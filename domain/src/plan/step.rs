//! Execution plan steps - value objects produced only by the compiler.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of an execution step.
///
/// The order of the variants is the fixed relative order steps appear in
/// a compiled plan; [`StepKind::rank`] exposes it for ordering checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Scan a pre-computed detection source
    Detect,
    /// Query integration modules for source data
    Query,
    /// Run the analysis model over the gathered data
    Analyze,
    /// Evaluate thresholds and business rules
    Decide,
    /// Dry-run the proposed actions
    Simulate,
    /// Wait for a human approval gate
    Approve,
    /// Carry the actions out downstream
    Execute,
    /// Notify the escalation ladder
    Notify,
    /// Feed outcomes back into the model
    Learn,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Detect => "detect",
            StepKind::Query => "query",
            StepKind::Analyze => "analyze",
            StepKind::Decide => "decide",
            StepKind::Simulate => "simulate",
            StepKind::Approve => "approve",
            StepKind::Execute => "execute",
            StepKind::Notify => "notify",
            StepKind::Learn => "learn",
        }
    }

    /// Position of this kind in the fixed plan order. Detect and query
    /// share a rank: exactly one of the two opens every plan.
    pub fn rank(&self) -> u8 {
        match self {
            StepKind::Detect | StepKind::Query => 0,
            StepKind::Analyze => 1,
            StepKind::Decide => 2,
            StepKind::Simulate => 3,
            StepKind::Approve => 4,
            StepKind::Execute => 5,
            StepKind::Notify => 6,
            StepKind::Learn => 7,
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step of a compiled execution plan.
///
/// Steps are value objects: never mutated after creation, produced only
/// by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    pub kind: StepKind,
    /// Short title shown in the review list
    pub title: String,
    /// Free-text detail describing what the step does
    pub detail: String,
    /// Which integration channel the step talks to
    pub channel: String,
}

impl ExecutionStep {
    pub fn new(
        kind: StepKind,
        title: impl Into<String>,
        detail: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            detail: detail.into(),
            channel: channel.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_monotonic() {
        let kinds = [
            StepKind::Detect,
            StepKind::Analyze,
            StepKind::Decide,
            StepKind::Simulate,
            StepKind::Approve,
            StepKind::Execute,
            StepKind::Notify,
            StepKind::Learn,
        ];
        for pair in kinds.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
        assert_eq!(StepKind::Detect.rank(), StepKind::Query.rank());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StepKind::Analyze).unwrap(),
            r#""analyze""#
        );
    }
}
