use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber used by the binary.
///
/// Filtering comes from `RUST_LOG`, falling back to `warn` so normal runs
/// only print the user-facing messages on stdout.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
