//! Logging setup for ruya binaries.

use tracing_subscriber::EnvFilter;

/// Builds the log filter: `RUST_LOG` when set, otherwise `fallback`.
///
/// An unparsable `fallback` degrades to `warn`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs a stderr `fmt` subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(fallback_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
