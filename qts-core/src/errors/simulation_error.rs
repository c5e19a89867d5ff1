//! Argument errors raised by generation, selection, and mode parsing.

use super::error_code::{self, QtsErrorCode};

/// Invalid input to a simulation operation. Fatal to the call; never
/// corrected silently.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid token count {count}: must be greater than 0")]
    InvalidTokenCount { count: usize },

    #[error("invalid target ratio {ratio}: must be in (0, 1]")]
    InvalidTargetRatio { ratio: f64 },

    #[error("unknown query mode: {value:?}")]
    UnknownQueryMode { value: String },
}

impl QtsErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ARGUMENT
    }
}
