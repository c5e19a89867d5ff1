//! Observability for the simulation.
//! `tracing` crate with `EnvFilter`, per-crate log levels.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_with_config};
