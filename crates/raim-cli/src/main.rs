//! raim - Operator command-line interface for RAIM RedBox appliances

use anyhow::Result;
use clap::{Parser, Subcommand};
use raim_core::RaimConfig;
use std::path::PathBuf;
use tracing::debug;

mod commands;
mod output;

use output::OutputFormat;

/// Operator command-line interface for RAIM RedBox appliances
#[derive(Debug, Parser)]
#[command(name = "raim")]
#[command(about = "Plan and inspect model deployments on RedBox appliance tiers")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Enable JSON output (overrides --output)
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a deployment plan for a model on a hardware tier
    Plan {
        /// Hardware tier name or canonical label (e.g. "RedBox Max - 64x H100 SXM")
        #[arg(long, default_value = "RedBox One")]
        hardware: String,

        /// Model name; unlisted models deploy without preference data
        #[arg(short, long)]
        model: Option<String>,

        /// Requested concurrent model instances
        #[arg(long, default_value = "1")]
        concurrency: u32,
    },

    /// List the configured hardware tiers
    #[command(name = "list-hardware")]
    ListHardware,

    /// List the model catalog
    #[command(name = "list-models")]
    ListModels,

    /// Sample simulated node telemetry
    Telemetry {
        /// Hardware tier name or canonical label
        #[arg(long, default_value = "RedBox One")]
        hardware: String,

        /// Simulate offline mode
        #[arg(long)]
        offline: bool,

        /// RNG seed for reproducible samples
        #[arg(long)]
        seed: Option<u64>,

        /// Number of samples to draw
        #[arg(long, default_value = "1")]
        samples: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "raim_cli={},raim_core={},raim_sim={}",
            log_level, log_level, log_level
        ))
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => RaimConfig::load_from_file(path)?,
        None => RaimConfig::load()?,
    };
    debug!(tiers = config.hardware.len(), "loaded configuration");

    let output_format = if cli.json {
        OutputFormat::Json
    } else {
        cli.output
    };

    match cli.command {
        Commands::Plan {
            hardware,
            model,
            concurrency,
        } => {
            commands::plan::plan(&config, &hardware, model.as_deref(), concurrency, output_format)?;
        }

        Commands::ListHardware => {
            commands::hardware::list_hardware(&config, output_format)?;
        }

        Commands::ListModels => {
            commands::models::list_models(&config, output_format)?;
        }

        Commands::Telemetry {
            hardware,
            offline,
            seed,
            samples,
        } => {
            commands::telemetry::show_telemetry(
                &config,
                &hardware,
                offline,
                seed,
                samples,
                output_format,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["raim", "list-models"]).unwrap();
        assert!(matches!(cli.command, Commands::ListModels));

        let cli = Cli::try_parse_from([
            "raim",
            "plan",
            "--hardware",
            "RedBox Max",
            "--model",
            "LLaMA 3 70B",
            "--concurrency",
            "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Plan {
                hardware,
                model,
                concurrency,
            } => {
                assert_eq!(hardware, "RedBox Max");
                assert_eq!(model.as_deref(), Some("LLaMA 3 70B"));
                assert_eq!(concurrency, 4);
            }
            _ => panic!("expected plan command"),
        }
    }

    #[test]
    fn test_output_format_flags() {
        let cli = Cli::try_parse_from(["raim", "--json", "list-hardware"]).unwrap();
        assert!(cli.json);

        let cli = Cli::try_parse_from(["raim", "--output", "yaml", "list-hardware"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Yaml);
    }

    #[test]
    fn test_plan_defaults() {
        let cli = Cli::try_parse_from(["raim", "plan"]).unwrap();
        match cli.command {
            Commands::Plan {
                hardware,
                model,
                concurrency,
            } => {
                assert_eq!(hardware, "RedBox One");
                assert!(model.is_none());
                assert_eq!(concurrency, 1);
            }
            _ => panic!("expected plan command"),
        }
    }
}
