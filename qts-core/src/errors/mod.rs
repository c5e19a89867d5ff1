//! Error handling for the simulation.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod qts_error;
pub mod simulation_error;

pub use config_error::ConfigError;
pub use error_code::QtsErrorCode;
pub use qts_error::{QtsError, QtsResult};
pub use simulation_error::SimulationError;
