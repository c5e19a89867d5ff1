use super::error_code::QtsErrorCode;
use super::{ConfigError, SimulationError};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum QtsError {
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl QtsError {
    /// True for the `InvalidArgument` kind: a bad count, ratio, or mode.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Simulation(_))
    }
}

impl QtsErrorCode for QtsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Simulation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type QtsResult<T> = Result<T, QtsError>;
