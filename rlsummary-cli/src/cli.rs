//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Configuration file used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "rlsummary.toml";

/// rlsummary -- render a ReversingLabs `report.rl.json` as a markdown summary.
///
/// Use `rlsummary <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "rlsummary", version, about, long_about = None)]
pub struct Cli {
    /// Path to the rlsummary.toml configuration file [default: rlsummary.toml].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective configuration path.
    pub fn config_path(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Whether the configuration path was given on the command line.
    ///
    /// A missing default file falls back to defaults; a missing explicit file is an error.
    pub fn config_is_explicit(&self) -> bool {
        self.config.is_some()
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown / human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a report as a markdown summary.
    Summarize(SummarizeArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- summarize ----

/// Render a `report.rl.json` file as markdown.
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Path to the report.rl.json file.
    #[arg(long = "rl-json-file", env = "INPUT_RL_JSON_FILE")]
    pub rl_json_file: PathBuf,

    /// Emit violation blocks as plain anchors instead of collapsible sections.
    #[arg(long)]
    pub plain: bool,

    /// Append the markdown to this file (e.g. the CI step summary file).
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Append `time` and `violations` outputs as `key=value` lines to this file.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,
}

// ---- config ----

/// Manage rlsummary configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, render).
        #[arg(long)]
        section: Option<String>,
    },
}
