//! # qts-results
//!
//! The paper's result tables as typed data, with the derived figures the
//! page quotes (token reduction at 600 frames, largest per-task gain, where
//! the full model wins the ablation).

pub mod ablation;
pub mod catalog;
pub mod comparison;
pub mod scaling;
pub mod tab;

pub use ablation::{AblationRow, AblationVariant};
pub use catalog::ResultsCatalog;
pub use comparison::TaskComparison;
pub use scaling::ScalingPoint;
pub use tab::{ResultsTab, Table};
