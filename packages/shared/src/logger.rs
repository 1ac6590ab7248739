//! Logging setup utilities for the Hiroba broadcast server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Module path of the server library crate
const SERVER_CRATE: &str = "hiroba_server";

/// Initialize the tracing subscriber with the specified default log level.
///
/// Both the server library crate and the binary log at `default_log_level`
/// unless `RUST_LOG` says otherwise.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "hiroba-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use hiroba_shared::logger::setup_logger;
///
/// setup_logger("hiroba-server", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the `EnvFilter` directive used when `RUST_LOG` is not set.
///
/// Binary names are normalized to their module form (`-` → `_`). A binary
/// named like the server crate gets a single directive.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let bin = binary_name.replace('-', "_");
    let mut targets = vec![SERVER_CRATE];
    if bin != SERVER_CRATE {
        targets.push(&bin);
    }
    targets.push("tower_http");

    targets
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}
