//! # qts-core
//!
//! Foundation crate for the QTSplus token-selection simulation.
//! Defines query modes, the random-source seam, errors, config, constants,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod mode;
pub mod random;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::SimulationConfig;
pub use errors::{QtsError, QtsResult};
pub use mode::QueryMode;
pub use random::RandomSource;
