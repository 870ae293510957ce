//! Tracing setup for the rlsummary binary.
//!
//! Reads `log_level` and `log_format` from the `[general]` section. `RUST_LOG`
//! overrides the configured level. Every format writes to stderr; stdout is
//! reserved for the summary.

use std::io::IsTerminal;

use anyhow::{Context, Result, bail};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use rlsummary_core::config::GeneralConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber. Call once, before the first event.
///
/// `log_format` is `"json"` (one JSON object per line) or `"pretty"`.
pub fn init_tracing(config: &GeneralConfig) -> Result<()> {
    let layer = format_layer(&config.log_format)?;

    tracing_subscriber::registry()
        .with(layer)
        .with(level_filter(&config.log_level))
        .try_init()
        .with_context(|| {
            format!(
                "failed to initialize {} tracing subscriber",
                config.log_format
            )
        })
}

fn level_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
}

fn format_layer(format: &str) -> Result<BoxedLayer> {
    let layer = fmt::layer().with_writer(std::io::stderr);
    let boxed = match format {
        "json" => layer.json().boxed(),
        "pretty" => layer
            .pretty()
            .with_ansi(std::io::stderr().is_terminal())
            .boxed(),
        other => bail!("unknown log format '{other}', expected 'json' or 'pretty'"),
    };
    Ok(boxed)
}
