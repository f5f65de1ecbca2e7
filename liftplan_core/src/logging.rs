//! Logging setup shared by the Liftplan binaries.
//!
//! Diagnostics go to stderr through `tracing` so generated plans on stdout
//! stay clean enough to pipe into other tools.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with sensible defaults
///
/// Quiet by default so plan output is not interleaved with diagnostics.
/// Override with the RUST_LOG env var or a `-v` flag.
pub fn init() {
    init_with_level("warn")
}

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (debug, info, warn, error)
///
/// This can still be overridden by RUST_LOG environment variable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Map a repeated `-v` flag count to a default log level
pub fn level_for_verbosity(count: u8) -> &'static str {
    match count {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
