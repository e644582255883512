//! Diagnostic logging.
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - every history push/pop and edit command
//! - `RUST_LOG=memento_pad::config=debug` - module-level filtering
//!
//! Logs go to stderr so they never interleave with the menu on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. Defaults to `warn` when RUST_LOG is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
