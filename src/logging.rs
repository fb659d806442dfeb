//! Tracing subscriber initialization.
//!
//! Diagnostics go to stderr and are off unless `RUST_LOG` asks for them, so
//! stdout only ever carries the report. Records emitted through the `log`
//! facade by the library crates are forwarded to the same subscriber.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "off";

/// Installs the global subscriber. Fails if one is already set.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
