//! CLI entrypoint for pulse-agents
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Result};
use clap::Parser;
use pulse_application::{AgentGateway, AgentWizard};
use pulse_domain::{
    AgentDraft, DomainCategory, ModuleRegistry, PlanCompiler, TemplateCatalog,
};
use pulse_infrastructure::{ConfigLoader, FileConfig, HttpAgentGateway, OfflineGateway};
use pulse_presentation::{Cli, Command, ConsoleFormatter, DraftOverrides, OutputFormat, Spinner};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e.to_string()))?
    };

    info!("Starting pulse-agents");

    // === Dependency Injection ===
    if cli.offline || config.offline {
        run(OfflineGateway::new(), config, cli).await
    } else {
        let gateway = HttpAgentGateway::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )?;
        run(gateway, config, cli).await
    }
}

async fn run<G: AgentGateway + 'static>(gateway: G, config: FileConfig, cli: Cli) -> Result<()> {
    let gateway = Arc::new(gateway);
    let registry = ModuleRegistry::builtin();

    let Some(command) = cli.command else {
        bail!("No command given. Try `pulse-agents templates` or `pulse-agents --help`.");
    };

    match command {
        Command::Templates { query, category } => {
            let category = parse_category(category.as_deref())?;

            let mut catalog = TemplateCatalog::builtin();
            let spinner = Spinner::start("Loading remote templates...", cli.quiet);
            // Best-effort: built-ins are always sufficient
            if let Ok(remote) = gateway.load_templates().await {
                catalog.extend(remote);
            }
            spinner.finish();

            let hits = catalog.search(query.as_deref().unwrap_or(""), category);
            println!("{}", ConsoleFormatter::format_templates(&hits));
        }

        Command::Preview { template, overrides } => {
            let catalog = TemplateCatalog::builtin();
            let Some(template) = catalog.find_by_id(&template) else {
                bail!("Unknown template: {} (try `pulse-agents templates`)", template);
            };

            let mut draft = AgentDraft::new();
            draft.apply_template_defaults(template, registry.resolve(template.category));
            apply_overrides(&mut draft, &overrides)?;

            let compiler = PlanCompiler::new(&registry);
            let plan = compiler.compile(template, &draft);
            print_plan(&plan, cli.output);
        }

        Command::Create {
            template,
            objective,
            overrides,
        } => {
            let mut wizard = AgentWizard::new(
                Arc::clone(&gateway),
                TemplateCatalog::builtin(),
                registry,
                config.api.user_id.clone(),
            );

            let spinner = Spinner::start("Loading remote templates...", cli.quiet);
            wizard.load_remote_templates().await;
            spinner.finish();

            if let Some(id) = &template {
                wizard.select_template(id)?;
            }
            if let Some(text) = &objective {
                wizard.set_objective(text.clone());
            }

            let spinner = Spinner::start("Interpreting intent...", cli.quiet);
            let result = wizard.next().await;
            spinner.finish();
            result?;

            if let Some(draft) = wizard.draft_mut() {
                apply_overrides(draft, &overrides)?;
            }
            wizard.next().await?;

            if !cli.quiet {
                println!("{}", ConsoleFormatter::format_review(&wizard.review_summary()));
            }
            if let Some(plan) = wizard.plan() {
                print_plan(plan, cli.output);
            }

            let spinner = Spinner::start("Saving agent...", cli.quiet);
            let monitor_id = wizard.submit().await?;
            spinner.finish();

            println!("Saved agent: {}", monitor_id);
        }
    }

    Ok(())
}

fn parse_category(raw: Option<&str>) -> Result<Option<DomainCategory>> {
    match raw {
        None => Ok(None),
        // "all" disables the category filter
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => match s.parse::<DomainCategory>() {
            Ok(category) => Ok(Some(category)),
            Err(e) => bail!(e),
        },
    }
}

fn apply_overrides(draft: &mut AgentDraft, overrides: &DraftOverrides) -> Result<()> {
    if let Some(name) = &overrides.name {
        draft.name = name.clone();
    }
    if let Some(automation) = &overrides.automation {
        draft.automation = automation.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    }
    if let Some(cadence) = &overrides.cadence {
        draft.cadence = cadence.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    }
    if let Some(severity) = &overrides.severity {
        draft.severity = severity.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    }
    if overrides.require_approval {
        draft.integration.approval_required = true;
    }
    if overrides.no_approval {
        draft.integration.approval_required = false;
    }
    if let Some(confidence) = overrides.confidence {
        draft.analysis.set_confidence(confidence);
    }

    for key in &overrides.enable_actions {
        set_action(draft, key, true)?;
    }
    for key in &overrides.disable_actions {
        set_action(draft, key, false)?;
    }

    Ok(())
}

fn set_action(draft: &mut AgentDraft, key: &str, enabled: bool) -> Result<()> {
    match draft.automated_actions.get(key).copied() {
        Some(current) => {
            if current != enabled {
                draft.toggle_action(key);
            }
            Ok(())
        }
        None => bail!("Unknown action key for this domain: {}", key),
    }
}

fn print_plan(plan: &pulse_domain::ExecutionPlan, output: OutputFormat) {
    let rendered = match output {
        OutputFormat::Full => ConsoleFormatter::format_plan(plan),
        OutputFormat::Steps => ConsoleFormatter::format_plan_steps(plan),
        OutputFormat::Json => ConsoleFormatter::format_plan_json(plan),
    };
    println!("{}", rendered);
}
