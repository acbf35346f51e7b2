//! tfplan-tools: inspect, filter and compare Terraform JSON plans
//!
//! Reduces a plan to the attribute changes that matter after a filter has
//! removed the expected noise, and compares two plans under the same filter.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tfplan_tools::{
    cli,
    config::{
        AppConfig, BehaviorConfig, CompareConfigBuilder, InspectConfigBuilder, OutputConfig,
        CONFIG_FILE_NAMES,
    },
    reports::ReportFormat,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tfplan-tools")]
#[command(version)]
#[command(about = "Inspect, filter and compare Terraform JSON plans", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No un-filtered changes (or no --detailed-exitcode)
    1  Error occurred
    2  Un-filtered changes or divergences with --detailed-exitcode

EXAMPLES:
    # Inspect a plan rendered with `terraform show -json`
    tfplan-tools inspect --plan plan.json --filter filter.json --pretty

    # Fail a pipeline when anything outside the filter changes
    terraform show -json tfplan | tfplan-tools inspect -p - -f filter.json -d

    # Compare two environments under the same filter
    tfplan-tools compare -a staging.json -b production.json -f filter.json -P")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Options shared by `inspect` and `compare`
#[derive(clap::Args)]
struct ReportArgs {
    /// Filter as inline JSON, `-` for stdin, or a file path
    #[arg(short, long)]
    filter: Option<String>,

    /// Exit with code 2 when un-filtered changes remain
    #[arg(short, long)]
    detailed_exitcode: bool,

    /// Render Terraform-style text instead of JSON (same as `-o pretty`)
    #[arg(short = 'P', long)]
    pretty: bool,

    /// Output format (auto: pretty on a terminal, JSON otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

impl ReportArgs {
    const fn format(&self) -> ReportFormat {
        if self.pretty {
            ReportFormat::Pretty
        } else {
            self.output
        }
    }
}

/// Arguments for the `inspect` subcommand
#[derive(Parser)]
struct InspectArgs {
    /// Plan as inline JSON, `-` for stdin, or a file path
    #[arg(short, long)]
    plan: String,

    #[command(flatten)]
    report: ReportArgs,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// First plan as inline JSON, `-` for stdin, or a file path
    #[arg(short = 'a', long)]
    plan_a: String,

    /// Second plan as inline JSON, `-` for stdin, or a file path
    #[arg(short = 'b', long)]
    plan_b: String,

    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the un-filtered changes of a plan
    Inspect(InspectArgs),

    /// Show where the un-filtered changes of two plans diverge
    Compare(CompareArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .tfplan-tools.yaml in the current directory
    Init,
}

/// Layer the command line over the discovered config file.
fn effective_config(cli: &Cli, report: &ReportArgs) -> AppConfig {
    let overrides = AppConfig::builder()
        .output_format(report.format())
        .output_file(report.output_file.clone())
        .no_color(cli.no_color)
        .detailed_exitcode(report.detailed_exitcode)
        .quiet(cli.quiet)
        .build();

    let (config, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }
    config
}

fn output_and_behavior(config: &AppConfig) -> (OutputConfig, BehaviorConfig) {
    (config.output.clone(), config.behavior.clone())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Dispatch to command handlers
    match &cli.command {
        Commands::Inspect(args) => {
            let app_config = effective_config(&cli, &args.report);
            let (output, behavior) = output_and_behavior(&app_config);
            let config = InspectConfigBuilder::new()
                .plan(args.plan.clone())
                .filter(args.report.filter.clone())
                .output(output)
                .behavior(behavior)
                .build()?;

            let exit_code = cli::run_inspect(config, app_config.filter.filter_file.as_deref())?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Compare(args) => {
            let app_config = effective_config(&cli, &args.report);
            let (output, behavior) = output_and_behavior(&app_config);
            let config = CompareConfigBuilder::new()
                .plan_a(args.plan_a.clone())
                .plan_b(args.plan_b.clone())
                .filter(args.report.filter.clone())
                .output(output)
                .behavior(behavior)
                .build()?;

            let exit_code = cli::run_compare(config, app_config.filter.filter_file.as_deref())?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "tfplan-tools", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = tfplan_tools::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    tfplan_tools::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    tfplan_tools::config::user_config_dir().map(|p| p.display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match tfplan_tools::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".tfplan-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = tfplan_tools::config::generate_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
