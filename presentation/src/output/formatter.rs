//! Console formatting for templates, plans, and review summaries

use colored::Colorize;
use pulse_application::ReviewSummary;
use pulse_domain::{ExecutionPlan, SeverityLevel, StepKind, Template};

/// Formats domain output for the terminal.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One line per template: id, category, name, severity.
    pub fn format_templates(templates: &[&Template]) -> String {
        if templates.is_empty() {
            return "No templates match.".to_string();
        }

        let mut out = String::new();
        for template in templates {
            out.push_str(&format!(
                "{:<22} {:<10} {:<8} {}\n",
                template.id.bold(),
                template.category.as_str().dimmed(),
                Self::severity_colored(template.default_severity),
                template.name
            ));
            out.push_str(&format!("{:<22} {}\n", "", template.description.dimmed()));
        }
        out
    }

    /// Numbered step list with details and channels.
    pub fn format_plan(plan: &ExecutionPlan) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} {}\n\n", "Objective:".bold(), plan.objective));
        for (index, step) in plan.steps.iter().enumerate() {
            out.push_str(&format!(
                "{:>2}. {:<10} {}\n",
                index + 1,
                Self::kind_colored(step.kind),
                step.detail
            ));
            out.push_str(&format!("    {:<10} {}\n", "", format!("via {}", step.channel).dimmed()));
        }
        out
    }

    /// Step kinds only, one per line.
    pub fn format_plan_steps(plan: &ExecutionPlan) -> String {
        plan.steps
            .iter()
            .map(|s| s.kind.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Plan as pretty JSON. Serialization of plain data cannot fail.
    pub fn format_plan_json(plan: &ExecutionPlan) -> String {
        serde_json::to_string_pretty(plan).unwrap_or_default()
    }

    /// The review-step summary block.
    pub fn format_review(summary: &ReviewSummary) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", summary.scope_label.bold()));
        for line in &summary.scope_lines {
            out.push_str(&format!("  {}\n", line));
        }
        out.push_str(&format!("{}\n", "Automated actions".bold()));
        if summary.action_labels.is_empty() {
            out.push_str("  (none enabled)\n");
        } else {
            for label in &summary.action_labels {
                out.push_str(&format!("  {}\n", label));
            }
        }
        if !summary.target_module.is_empty() {
            out.push_str(&format!("{} {}\n", "Target module:".bold(), summary.target_module));
        }
        out.push_str(&format!(
            "{} {}\n",
            "Escalation tiers active:".bold(),
            summary.escalation_tiers_active
        ));
        out
    }

    fn kind_colored(kind: StepKind) -> String {
        let text = kind.as_str();
        match kind {
            StepKind::Detect | StepKind::Query => text.cyan().to_string(),
            StepKind::Analyze | StepKind::Decide => text.blue().to_string(),
            StepKind::Simulate => text.yellow().to_string(),
            StepKind::Approve => text.magenta().to_string(),
            StepKind::Execute => text.red().to_string(),
            StepKind::Notify => text.green().to_string(),
            StepKind::Learn => text.dimmed().to_string(),
        }
    }

    fn severity_colored(severity: SeverityLevel) -> String {
        let text = severity.as_str();
        match severity {
            SeverityLevel::Critical => text.red().to_string(),
            SeverityLevel::High => text.yellow().to_string(),
            SeverityLevel::Medium => text.blue().to_string(),
            SeverityLevel::Low => text.dimmed().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_domain::ExecutionStep;

    fn plan() -> ExecutionPlan {
        ExecutionPlan::new(
            "Watch coverage",
            vec![
                ExecutionStep::new(StepKind::Query, "Query", "pull data", "Data warehouse"),
                ExecutionStep::new(StepKind::Learn, "Learn", "feed back", "Model feedback store"),
            ],
        )
    }

    #[test]
    fn test_plan_format_contains_steps_and_objective() {
        let out = ConsoleFormatter::format_plan(&plan());
        assert!(out.contains("Watch coverage"));
        assert!(out.contains("pull data"));
        assert!(out.contains("via Data warehouse"));
    }

    #[test]
    fn test_steps_format_is_kind_per_line() {
        assert_eq!(ConsoleFormatter::format_plan_steps(&plan()), "query\nlearn");
    }

    #[test]
    fn test_json_format_round_trips() {
        let json = ConsoleFormatter::format_plan_json(&plan());
        let decoded: ExecutionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, plan());
    }

    #[test]
    fn test_empty_template_list() {
        assert_eq!(
            ConsoleFormatter::format_templates(&[]),
            "No templates match."
        );
    }
}
