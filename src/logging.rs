//! Logging init: structured events to stderr so stdout stays free for the
//! walkthrough output.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,cmr_stac_walker=debug";

/// Initialize logging to stderr. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
