use std::io::{stdout, IsTerminal};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,ezpay_core=debug";

/// Human-readable output on a terminal, JSON lines when piped.
pub fn setup_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = if stdout().is_terminal() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(true)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_target(true)
            .try_init()
    };

    // A subscriber may already be installed when embedded in tests.
    if result.is_ok() {
        tracing::info!("Logging initialized");
    }
}
