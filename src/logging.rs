//! Structured request logging for the web server.
//!
//! Console output of the CLI keeps using the `info!`/`success!`/`warning!`
//! macros; everything the handlers report goes through `tracing`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "toptracks=info";

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this twice is
/// harmless, the second subscriber is rejected and `false` is returned.
pub fn init_logging(default_filter: &str) -> bool {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer().with_target(true).compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
