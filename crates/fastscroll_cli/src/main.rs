//! Fastscroll CLI
//!
//! Replays touch scenarios against a headless fast-scroll surface and prints
//! a JSON report, or prints the effective controller configuration.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fastscroll_core::FastScrollConfig;
use fastscroll_host::{run_loaded_scenario, Scenario};

/// Fast-scroll thumb controller tools
#[derive(Parser, Debug)]
#[command(name = "fastscroll")]
#[command(about = "Replay touch scenarios against a headless fast-scroll surface")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a JSON scenario and print its report
    Replay {
        /// Scenario file
        scenario: PathBuf,

        /// Controller configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also write the report to this relative path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Controller configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Start from a preset instead of the defaults when no file is given
        #[arg(long, value_parser = ["default", "conservative", "large-touch-target"])]
        preset: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    // Reports go to stdout; keep logs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            scenario,
            config,
            report,
        } => cmd_replay(&scenario, config.as_deref(), report.as_deref()),
        Commands::Config { config, preset } => {
            cmd_config(config.as_deref(), preset.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<FastScrollConfig> {
    match path {
        Some(path) => FastScrollConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(FastScrollConfig::default()),
    }
}

fn cmd_replay(scenario_path: &Path, config: Option<&Path>, report: Option<&Path>) -> Result<ExitCode> {
    let config = load_config(config)?;
    let scenario = Scenario::from_path(scenario_path)
        .with_context(|| format!("Failed to load scenario {}", scenario_path.display()))?;

    tracing::info!(
        "Replaying {} ({} steps)",
        scenario_path.display(),
        scenario.steps.len()
    );

    let outcome = run_loaded_scenario(&scenario, config);
    let report_data = outcome.report();

    report_data
        .write_to_writer(&mut std::io::stdout().lock())
        .context("Failed to print report")?;
    if let Some(path) = report {
        report_data
            .write_to_path(path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        tracing::info!("Report written to {}", path.display());
    }

    if outcome.is_failed() {
        tracing::warn!(
            "Scenario failed at step {:?}: {}",
            report_data.failed_step_index,
            report_data.message.as_deref().unwrap_or("")
        );
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_config(config: Option<&Path>, preset: Option<&str>) -> Result<()> {
    let config = match (config, preset) {
        (Some(path), _) => load_config(Some(path))?,
        (None, Some("conservative")) => FastScrollConfig::conservative(),
        (None, Some("large-touch-target")) => FastScrollConfig::large_touch_target(),
        (None, _) => FastScrollConfig::default(),
    };
    let text = config.to_toml().context("Failed to render config")?;
    print!("{text}");
    Ok(())
}
