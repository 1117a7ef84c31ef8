//! Logging setup shared by the binaries.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// The filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a global subscriber that writes human-readable logs to stderr.
///
/// The verbosity is read from `RUST_LOG` (e.g. `RUST_LOG=fintrack=debug`),
/// falling back to [DEFAULT_LOG_FILTER]. Logs go to stderr so they do not mix
/// with tables printed to stdout.
pub fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(filter))
        .init();
}
