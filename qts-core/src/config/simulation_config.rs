//! Top-level simulation configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, GlobalModeConfig, LocalModeConfig, ObservabilityConfig};
use crate::constants::{ENV_LOG_LEVEL, ENV_TOKEN_COUNT, LOG_LEVELS};
use crate::errors::ConfigError;
use crate::mode::QueryMode;

/// Top-level configuration aggregating the per-mode sections.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`QTS_*`)
/// 2. Config file passed to [`SimulationConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of token slots per generation.
    pub token_count: usize,
    pub local: LocalModeConfig,
    pub global: GlobalModeConfig,
    pub observability: ObservabilityConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            token_count: defaults::DEFAULT_TOKEN_COUNT,
            local: LocalModeConfig::default(),
            global: GlobalModeConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration: file (if given) over defaults, then env overrides,
    /// then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;

        ::tracing::debug!(
            token_count = config.token_count,
            local_ratio = config.local.target_ratio,
            global_ratio = config.global.target_ratio,
            "simulation config loaded"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    /// Does not validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Unparseable values are ignored and the lower layer wins.
    fn apply_env_overrides(config: &mut SimulationConfig) {
        if let Ok(val) = std::env::var(ENV_TOKEN_COUNT) {
            if let Ok(v) = val.trim().parse::<usize>() {
                config.token_count = v;
            }
        }
        if let Ok(val) = std::env::var(ENV_LOG_LEVEL) {
            config.observability.log_level = val.trim().to_ascii_lowercase();
        }
    }

    /// Target retention ratio for `mode`.
    pub fn target_ratio(&self, mode: QueryMode) -> f64 {
        match mode {
            QueryMode::Local => self.local.target_ratio,
            QueryMode::Global => self.global.target_ratio,
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_count == 0 {
            return Err(invalid("token_count", "must be greater than 0"));
        }

        for (field, ratio) in [
            ("local.target_ratio", self.local.target_ratio),
            ("global.target_ratio", self.global.target_ratio),
        ] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(invalid(field, "must be in (0.0, 1.0]"));
            }
        }

        if !(0.0..=1.0).contains(&self.local.center_fraction) {
            return Err(invalid(
                "local.center_fraction",
                "must be between 0.0 and 1.0",
            ));
        }

        for (field, value) in [
            ("local.decay", self.local.decay),
            ("local.jitter_scale", self.local.jitter_scale),
            ("global.floor", self.global.floor),
            ("global.spread", self.global.spread),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite value >= 0.0"));
            }
        }

        if self.global.floor + self.global.spread > 1.0 {
            return Err(invalid("global.spread", "floor + spread must not exceed 1.0"));
        }

        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(invalid(
                "observability.log_level",
                "must be one of trace, debug, info, warn, error",
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
