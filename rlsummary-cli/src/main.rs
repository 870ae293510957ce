//! rlsummary -- render a ReversingLabs `report.rl.json` as a markdown summary.
//!
//! stdout carries only command output; logs and the failure line go to stderr.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use rlsummary_core::config::GeneralConfig;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputWriter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let writer = OutputWriter::new(cli.format);
    let config_path = cli.config_path().to_path_buf();
    let explicit = cli.config_is_explicit();

    match cli.command {
        Commands::Summarize(args) => {
            let mut config = commands::load_config(&config_path, explicit).await?;
            if let Some(level) = cli.log_level {
                config.general.log_level = level;
                config.validate()?;
            }
            init_logging(&config.general)?;

            tracing::info!(config = %config_path.display(), "rlsummary starting");
            commands::summarize::execute(args, &config, &writer).await
        }
        Commands::Config(args) => {
            let mut general = GeneralConfig::default();
            if let Some(level) = cli.log_level {
                general.log_level = level;
            }
            init_logging(&general)?;

            commands::config::execute(args, &config_path, explicit, &writer).await
        }
    }
}

fn init_logging(general: &GeneralConfig) -> Result<(), CliError> {
    logging::init_tracing(general).map_err(|e| CliError::Config(format!("{e:#}")))
}

/// Print the single failure line, using the workflow command syntax under GitHub Actions.
fn report_failure(err: &CliError) {
    let under_ci = std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true");
    if under_ci {
        eprintln!("::error::{err}");
    } else {
        eprintln!("{} {err}", "error:".red().bold());
    }
}
