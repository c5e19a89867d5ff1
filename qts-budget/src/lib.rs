//! # qts-budget
//!
//! Query-aware token budgeting.
//! Generates a synthetic relevance score per visual token (peaked for local
//! queries, diffuse for global ones), then keeps exactly
//! `ceil(n * target_ratio)` of them by rank.

pub mod engine;
pub mod generator;
pub mod rng;
pub mod selector;
pub mod shape;
pub mod token;

pub use engine::BudgetEngine;
pub use generator::generate;
pub use rng::{RngSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use selector::{keep_count, rank, select};
pub use token::{Budget, Selection, Token};
