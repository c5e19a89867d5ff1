//! Configuration for the simulation.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod defaults;
pub mod mode_config;
pub mod observability_config;
pub mod simulation_config;

pub use mode_config::{GlobalModeConfig, LocalModeConfig};
pub use observability_config::ObservabilityConfig;
pub use simulation_config::SimulationConfig;
