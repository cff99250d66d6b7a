//! Console logging.
//!
//! Library crates log through the `log` facade. Those records are bridged
//! into `tracing` and printed by a `fmt` subscriber, filtered by `RUST_LOG`.

use tracing::subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber and the `log` bridge.
pub fn init() -> anyhow::Result<()> {
    LogTracer::init()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    subscriber::set_global_default(fmt_subscriber)?;
    Ok(())
}
