//! Per-mode relevance shape functions.
//!
//! Each takes one uniform sample in `[0, 1)` and returns a relevance in
//! `[0, 1]`. Results are clamped for every mode, even when the configured
//! constants already keep them in range.

use qts_core::config::{GlobalModeConfig, LocalModeConfig};

/// Peak shape: `exp(-|i - center| * decay)`.
pub fn local_base(index: usize, center: f64, decay: f64) -> f64 {
    (-(index as f64 - center).abs() * decay).exp()
}

/// Zero-centered jitter: `(sample - 0.5) * scale`.
pub fn centered_jitter(sample: f64, scale: f64) -> f64 {
    (sample - 0.5) * scale
}

/// Local-query relevance for slot `index` of `count`.
pub fn local_relevance(index: usize, count: usize, config: &LocalModeConfig, sample: f64) -> f64 {
    let base = local_base(index, config.center(count), config.decay);
    (base + centered_jitter(sample, config.jitter_scale)).clamp(0.0, 1.0)
}

/// Global-query relevance: `floor + sample * spread`.
pub fn global_relevance(config: &GlobalModeConfig, sample: f64) -> f64 {
    (config.floor + sample * config.spread).clamp(0.0, 1.0)
}
