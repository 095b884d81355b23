//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! Level priority: `RUST_LOG` environment variable, then the `--log-level`
//! CLI flag, then `info`.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialise the global subscriber. Call once at startup.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
