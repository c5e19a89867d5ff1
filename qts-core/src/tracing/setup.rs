//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize logging.
///
/// Reads the `QTS_LOG` environment variable for per-crate log levels.
/// Format: `QTS_LOG=qts_budget=debug,qts_session=info`
///
/// Falls back to every crate at `info` if `QTS_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    install(EnvFilter::new(DEFAULT_LOG_FILTER));
}

/// Like [`init_tracing`], but falls back to `config.log_level` for every
/// crate instead of `info`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    let directives = ["qts_core", "qts_budget", "qts_session"]
        .iter()
        .map(|krate| format!("{krate}={}", config.log_level))
        .collect::<Vec<_>>()
        .join(",");
    install(EnvFilter::new(directives));
}

fn install(fallback: EnvFilter) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or(fallback);

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
