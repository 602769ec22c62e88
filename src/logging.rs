//! Tracing subscriber setup for the CLI.
use tracing_subscriber::EnvFilter;

/// Environment variable holding an env-filter directive that overrides the
/// verbosity flag.
pub const LOG_ENV: &str = "SEASON_LOG";

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();

    tracing::debug!(verbose, "logging initialized");
}
