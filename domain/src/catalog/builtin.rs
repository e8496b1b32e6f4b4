//! Built-in agent templates.
//!
//! The remote catalog can extend this set at runtime, but these templates
//! are always available and are sufficient on their own when the service
//! is unreachable.

use super::template::{DomainCategory, Template};
use crate::agent::value_objects::{AutomationLevel, Cadence, SeverityLevel};

/// The built-in template set, in catalog display order.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "stockout-risk",
            "Stockout risk monitor",
            DomainCategory::Stox,
            "pulse-stockout-v2",
            "Watches coverage days per SKU and warehouse and flags items at risk of stocking out before the next replenishment window.",
        )
        .with_defaults(Cadence::Daily, SeverityLevel::High, AutomationLevel::Simulate)
        .with_example_query("Warn me when any A-class SKU drops below 10 days of coverage")
        .with_pattern_source("stockout_patterns"),
        Template::new(
            "dead-stock",
            "Dead stock detector",
            DomainCategory::Stox,
            "pulse-slowmover-v1",
            "Finds inventory with no movement over the lookback window and proposes clearance or writedown actions.",
        )
        .with_defaults(Cadence::Weekly, SeverityLevel::Medium, AutomationLevel::Recommend)
        .with_example_query("Show me stock that has not moved in 90 days"),
        Template::new(
            "margin-erosion",
            "Margin erosion watch",
            DomainCategory::Margen,
            "pulse-margin-v3",
            "Tracks realized margin per product group against target and raises findings when erosion exceeds the configured threshold.",
        )
        .with_defaults(Cadence::Daily, SeverityLevel::Critical, AutomationLevel::Recommend)
        .with_example_query("Alert me when margin on any product group falls 3 points below target"),
        Template::new(
            "price-variance",
            "Purchase price variance monitor",
            DomainCategory::Margen,
            "pulse-ppv-v1",
            "Scans received invoices for purchase prices drifting from the agreed list and flags suppliers with repeated variance.",
        )
        .with_defaults(Cadence::Hourly, SeverityLevel::High, AutomationLevel::Simulate)
        .with_pattern_source("price_variance_patterns"),
        Template::new(
            "sales-anomaly",
            "Sales anomaly detector",
            DomainCategory::Ventas,
            "pulse-anomaly-v2",
            "Detects unusual drops or spikes in order intake per channel and region relative to the seasonal baseline.",
        )
        .with_defaults(Cadence::RealTime, SeverityLevel::High, AutomationLevel::Recommend)
        .with_example_query("Tell me when daily orders in any channel fall 20% below baseline"),
        Template::new(
            "churn-signal",
            "Customer churn signal",
            DomainCategory::Ventas,
            "pulse-churn-v1",
            "Scores active customers for churn risk from ordering frequency and basket trends, and suggests outreach actions.",
        )
        .with_defaults(Cadence::Weekly, SeverityLevel::Medium, AutomationLevel::Recommend),
        Template::new(
            "cash-forecast",
            "Cash flow forecast guard",
            DomainCategory::Finanzas,
            "pulse-cashflow-v2",
            "Projects cash position over the forecast horizon and raises findings when the projection crosses the configured floor.",
        )
        .with_defaults(Cadence::Daily, SeverityLevel::Critical, AutomationLevel::Recommend)
        .with_example_query("Warn me if projected cash drops below 500k within 30 days"),
        Template::new(
            "overdue-receivables",
            "Overdue receivables chaser",
            DomainCategory::Finanzas,
            "pulse-receivables-v1",
            "Watches the receivables ledger for invoices crossing dunning thresholds and can draft reminder runs.",
        )
        .with_defaults(Cadence::Daily, SeverityLevel::Medium, AutomationLevel::Execute)
        .with_pattern_source("dunning_patterns"),
    ]
}
