//! Agent domain value objects - the closed vocabulary an agent draft is built from.
//!
//! # Schedule and priority
//! - [`Cadence`] - How often the agent's pipeline runs
//! - [`SeverityLevel`] - Priority assigned to findings
//!
//! # Autonomy
//! - [`AutomationLevel`] - Ordered escalation of agent autonomy
//! - [`WritebackMode`] - How downstream writebacks are applied
//!
//! # Analysis
//! - [`AnalysisDepth`] - How thorough each analysis pass is
//! - [`AnalysisParams`] - Tuning knobs for the analysis model

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often the agent's detect→decide→act pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// Run continuously on incoming data
    RealTime,
    /// Run once per hour
    Hourly,
    /// Run once per day
    #[default]
    Daily,
    /// Run once per week
    Weekly,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::RealTime => "real_time",
            Cadence::Hourly => "hourly",
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Cadence::RealTime => "Real-time",
            Cadence::Hourly => "Hourly",
            Cadence::Daily => "Daily",
            Cadence::Weekly => "Weekly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "real_time" | "realtime" | "real-time" => Ok(Cadence::RealTime),
            "hourly" => Ok(Cadence::Hourly),
            "daily" => Ok(Cadence::Daily),
            "weekly" => Ok(Cadence::Weekly),
            _ => Err(format!("Invalid cadence: {}", s)),
        }
    }
}

/// Priority assigned to the agent's findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl SeverityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Critical => "critical",
            SeverityLevel::High => "high",
            SeverityLevel::Medium => "medium",
            SeverityLevel::Low => "low",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SeverityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(SeverityLevel::Critical),
            "high" => Ok(SeverityLevel::High),
            "medium" => Ok(SeverityLevel::Medium),
            "low" => Ok(SeverityLevel::Low),
            _ => Err(format!("Invalid severity: {}", s)),
        }
    }
}

/// Ordered escalation of agent autonomy.
///
/// - **Recommend** (default): the agent only surfaces findings and
///   recommended actions; nothing is simulated or executed.
/// - **Simulate**: the agent dry-runs its actions and previews their
///   effect without touching downstream systems.
/// - **Execute**: the agent carries actions out against the target
///   integration, subject to the approval gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationLevel {
    #[default]
    Recommend,
    Simulate,
    Execute,
}

impl AutomationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutomationLevel::Recommend => "recommend",
            AutomationLevel::Simulate => "simulate",
            AutomationLevel::Execute => "execute",
        }
    }

    /// Whether plans at this level carry simulation and execution steps.
    ///
    /// Simulate is a dry run: it still exercises the execute step in
    /// preview form. Recommend never reaches execution.
    pub fn includes_simulation(&self) -> bool {
        matches!(self, AutomationLevel::Simulate | AutomationLevel::Execute)
    }

    /// Whether actions are actually carried out downstream.
    pub fn reaches_execution(&self) -> bool {
        matches!(self, AutomationLevel::Execute)
    }
}

impl fmt::Display for AutomationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AutomationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recommend" | "r" => Ok(AutomationLevel::Recommend),
            "simulate" | "s" => Ok(AutomationLevel::Simulate),
            "execute" | "e" => Ok(AutomationLevel::Execute),
            _ => Err(format!("Invalid automation level: {}", s)),
        }
    }
}

/// How thorough each analysis pass is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisDepth {
    Quick,
    #[default]
    Standard,
    Deep,
}

impl AnalysisDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisDepth::Quick => "quick",
            AnalysisDepth::Standard => "standard",
            AnalysisDepth::Deep => "deep",
        }
    }
}

impl fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How writebacks to the target integration module are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritebackMode {
    /// Only record a suggestion next to the source document
    Suggest,
    /// Create draft documents that a user must post
    #[default]
    Draft,
    /// Post documents directly
    Post,
}

impl WritebackMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WritebackMode::Suggest => "suggest",
            WritebackMode::Draft => "draft",
            WritebackMode::Post => "post",
        }
    }
}

impl fmt::Display for WritebackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bounds for the analysis confidence threshold.
pub const MIN_CONFIDENCE: u8 = 50;
pub const MAX_CONFIDENCE: u8 = 99;

/// Tuning knobs for the analysis model referenced by a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Minimum confidence (percent) before a finding is raised
    pub confidence_threshold: u8,
    /// How thorough each analysis pass is
    pub depth: AnalysisDepth,
    /// How far back the model looks, in days
    pub lookback_days: u16,
    /// How far ahead forecasts reach, in days
    pub forecast_days: u16,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            confidence_threshold: 85,
            depth: AnalysisDepth::Standard,
            lookback_days: 30,
            forecast_days: 14,
        }
    }
}

impl AnalysisParams {
    /// Set the confidence threshold, clamped to the valid 50-99 range.
    pub fn set_confidence(&mut self, value: u8) {
        self.confidence_threshold = value.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
    }
}

/// Settings for the downstream integration the agent writes back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSettings {
    /// Target system identifier (e.g. "erp")
    pub target_system: String,
    /// Module within the target system
    pub target_module: String,
    /// How writebacks are applied
    pub writeback_mode: WritebackMode,
    /// Whether an approval gate is required before execution
    pub approval_required: bool,
    /// Whether results sync to downstream consumers
    pub sync_downstream: bool,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            target_system: "erp".to_string(),
            target_module: String::new(),
            writeback_mode: WritebackMode::default(),
            approval_required: true,
            sync_downstream: false,
        }
    }
}

/// Number of escalation tiers every agent carries.
pub const ESCALATION_TIER_COUNT: usize = 4;

/// A single escalation tier.
///
/// Tier number and hour band are fixed at construction; only the
/// `enabled` flag is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationTier {
    /// Fixed tier number (1-based)
    pub tier: u8,
    /// Fixed hour-offset band covered by this tier
    pub hour_band: String,
    /// Whether this tier participates in escalation
    pub enabled: bool,
}

impl EscalationTier {
    fn new(tier: u8, hour_band: &str, enabled: bool) -> Self {
        Self {
            tier,
            hour_band: hour_band.to_string(),
            enabled,
        }
    }

    /// The fixed four-tier ladder: tiers 1-3 enabled by default.
    pub fn default_ladder() -> Vec<EscalationTier> {
        vec![
            EscalationTier::new(1, "0-4h", true),
            EscalationTier::new(2, "4-12h", true),
            EscalationTier::new(3, "12-24h", true),
            EscalationTier::new(4, "24h+", false),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_round_trip() {
        assert_eq!("daily".parse::<Cadence>().ok(), Some(Cadence::Daily));
        assert_eq!(
            "real-time".parse::<Cadence>().ok(),
            Some(Cadence::RealTime)
        );
        assert_eq!(Cadence::RealTime.as_str(), "real_time");
        assert!("fortnightly".parse::<Cadence>().is_err());
    }

    #[test]
    fn test_severity_default() {
        assert_eq!(SeverityLevel::default(), SeverityLevel::Medium);
        assert_eq!(format!("{}", SeverityLevel::Critical), "critical");
    }

    #[test]
    fn test_automation_escalation() {
        assert!(!AutomationLevel::Recommend.includes_simulation());
        assert!(AutomationLevel::Simulate.includes_simulation());
        assert!(AutomationLevel::Execute.includes_simulation());

        assert!(!AutomationLevel::Recommend.reaches_execution());
        assert!(!AutomationLevel::Simulate.reaches_execution());
        assert!(AutomationLevel::Execute.reaches_execution());
    }

    #[test]
    fn test_automation_from_str() {
        assert_eq!(
            "simulate".parse::<AutomationLevel>().ok(),
            Some(AutomationLevel::Simulate)
        );
        assert_eq!(
            "e".parse::<AutomationLevel>().ok(),
            Some(AutomationLevel::Execute)
        );
        assert!("autopilot".parse::<AutomationLevel>().is_err());
    }

    #[test]
    fn test_confidence_clamped() {
        let mut params = AnalysisParams::default();
        params.set_confidence(10);
        assert_eq!(params.confidence_threshold, MIN_CONFIDENCE);
        params.set_confidence(100);
        assert_eq!(params.confidence_threshold, MAX_CONFIDENCE);
        params.set_confidence(72);
        assert_eq!(params.confidence_threshold, 72);
    }

    #[test]
    fn test_default_ladder_shape() {
        let ladder = EscalationTier::default_ladder();
        assert_eq!(ladder.len(), ESCALATION_TIER_COUNT);
        let tiers: Vec<u8> = ladder.iter().map(|t| t.tier).collect();
        assert_eq!(tiers, vec![1, 2, 3, 4]);
        assert_eq!(ladder.iter().filter(|t| t.enabled).count(), 3);
    }
}
