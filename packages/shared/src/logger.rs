//! Logging setup shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence. Without it, `default_level` applies to the
/// calling binary and to the `roji_*` crates, and everything else logs at
/// `warn`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn default_directive(bin_name: &str, default_level: &str) -> String {
    let bin_target = bin_name.replace('-', "_");
    format!(
        "warn,{bin_target}={default_level},roji_shared={default_level},roji_server={default_level},roji_client={default_level},tower_http={default_level}"
    )
}
