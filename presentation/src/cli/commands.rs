//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for plans and review summaries
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Step list with details and channels
    Full,
    /// Step kinds only, one per line
    Steps,
    /// JSON output
    Json,
}

/// CLI arguments for pulse-agents
#[derive(Parser, Debug)]
#[command(name = "pulse-agents")]
#[command(author, version, about = "Author Pulse monitoring agents from the command line")]
#[command(long_about = r#"
pulse-agents compiles monitoring agents: pick a template (or describe the
agent in plain language), tune its configuration, preview the execution
plan, and save it to the Pulse service.

The service is optional. Templates load from the built-in catalog, intent
interpretation falls back to a local compile, and saving falls back to a
local identifier when the service is unreachable.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./pulse.toml        Project-level config
3. ~/.config/pulse-agents/config.toml   Global config

Example:
  pulse-agents templates --category stox
  pulse-agents preview stockout-risk --automation execute --no-approval
  pulse-agents create --template margin-erosion --name "Margin guard"
  pulse-agents create --objective "Warn me when coverage drops below 10 days"
"#)]
pub struct Cli {
    /// Not required so `--show-config` can run on its own
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Skip all network calls and run against fallbacks only
    #[arg(long, global = true)]
    pub offline: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List or search agent templates
    Templates {
        /// Search query matched against name and description
        query: Option<String>,

        /// Restrict to one domain category
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// Compile and print the execution plan for a template
    Preview {
        /// Template id (see `templates`)
        template: String,

        #[command(flatten)]
        overrides: DraftOverrides,
    },

    /// Author and save an agent
    Create {
        /// Template id to start from
        #[arg(short, long, value_name = "ID", conflicts_with = "objective")]
        template: Option<String>,

        /// Free-text description of what to monitor
        #[arg(long, value_name = "TEXT")]
        objective: Option<String>,

        #[command(flatten)]
        overrides: DraftOverrides,
    },
}

/// Configuration overrides applied on top of template defaults.
#[derive(clap::Args, Debug, Default)]
pub struct DraftOverrides {
    /// Agent name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Automation level (recommend, simulate, execute)
    #[arg(short, long, value_name = "LEVEL")]
    pub automation: Option<String>,

    /// Scheduling cadence (real_time, hourly, daily, weekly)
    #[arg(long, value_name = "CADENCE")]
    pub cadence: Option<String>,

    /// Finding severity (critical, high, medium, low)
    #[arg(long, value_name = "SEVERITY")]
    pub severity: Option<String>,

    /// Require the approval gate before execution
    #[arg(long, conflicts_with = "no_approval")]
    pub require_approval: bool,

    /// Drop the approval gate (only effective with --automation execute)
    #[arg(long)]
    pub no_approval: bool,

    /// Enable an automated action by key (repeatable)
    #[arg(long = "enable-action", value_name = "KEY")]
    pub enable_actions: Vec<String>,

    /// Disable an automated action by key (repeatable)
    #[arg(long = "disable-action", value_name = "KEY")]
    pub disable_actions: Vec<String>,

    /// Analysis confidence threshold (50-99)
    #[arg(long, value_name = "PERCENT")]
    pub confidence: Option<u8>,
}
