/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "QTS_LOG";

/// Filter used when `QTS_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "qts_core=info,qts_budget=info,qts_session=info";

/// Environment variable overriding `token_count`.
pub const ENV_TOKEN_COUNT: &str = "QTS_TOKEN_COUNT";

/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "QTS_LOG_LEVEL";

/// Accepted values for `observability.log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
