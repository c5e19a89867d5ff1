use serde::{Deserialize, Serialize};

use super::defaults;

/// Shape and budget for `Local` queries: a peak around a fixed center index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalModeConfig {
    /// Peak position as a fraction of the token count.
    pub center_fraction: f64,
    /// Exponential falloff per slot away from the peak.
    pub decay: f64,
    /// Width of the zero-centered jitter added to each token.
    pub jitter_scale: f64,
    /// Fraction of tokens to keep.
    pub target_ratio: f64,
}

impl Default for LocalModeConfig {
    fn default() -> Self {
        Self {
            center_fraction: defaults::DEFAULT_LOCAL_CENTER_FRACTION,
            decay: defaults::DEFAULT_LOCAL_DECAY,
            jitter_scale: defaults::DEFAULT_LOCAL_JITTER_SCALE,
            target_ratio: defaults::DEFAULT_LOCAL_TARGET_RATIO,
        }
    }
}

impl LocalModeConfig {
    /// Peak index for a sequence of `n` tokens.
    pub fn center(&self, n: usize) -> f64 {
        n as f64 * self.center_fraction
    }
}

/// Shape and budget for `Global` queries: uniform relevance in
/// `[floor, floor + spread)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalModeConfig {
    pub floor: f64,
    pub spread: f64,
    /// Fraction of tokens to keep.
    pub target_ratio: f64,
}

impl Default for GlobalModeConfig {
    fn default() -> Self {
        Self {
            floor: defaults::DEFAULT_GLOBAL_FLOOR,
            spread: defaults::DEFAULT_GLOBAL_SPREAD,
            target_ratio: defaults::DEFAULT_GLOBAL_TARGET_RATIO,
        }
    }
}
