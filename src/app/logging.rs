//! Diagnostic logging setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Variable holding an `EnvFilter` directive, e.g. `ice_strap=debug`.
pub const LOG_ENV: &str = "ICE_STRAP_LOG";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let fallback = if verbose { "ice_strap=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
