//! Command handlers -- one module per subcommand

pub mod config;
pub mod summarize;

use std::path::Path;

use rlsummary_core::config::RlSummaryConfig;

use crate::error::CliError;

/// Load the effective configuration.
///
/// An explicitly given file must exist; the default path may be absent, in which
/// case defaults plus environment overrides are used.
pub async fn load_config(path: &Path, explicit: bool) -> Result<RlSummaryConfig, CliError> {
    let config = if explicit {
        RlSummaryConfig::load(path).await?
    } else {
        RlSummaryConfig::load_or_default(path).await?
    };
    Ok(config)
}
