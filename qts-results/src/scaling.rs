use serde::Serialize;

/// Visual token count at one input length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingPoint {
    pub frames: u32,
    pub baseline_tokens: u32,
    pub qts_tokens: u32,
}

impl ScalingPoint {
    /// Fraction of baseline tokens removed, in `[0, 1]`.
    pub fn reduction_ratio(&self) -> f64 {
        if self.baseline_tokens == 0 {
            return 0.0;
        }
        1.0 - f64::from(self.qts_tokens) / f64::from(self.baseline_tokens)
    }

    /// Baseline tokens per QTSplus token.
    pub fn compression_factor(&self) -> f64 {
        if self.qts_tokens == 0 {
            return f64::INFINITY;
        }
        f64::from(self.baseline_tokens) / f64::from(self.qts_tokens)
    }
}

/// Largest reduction ratio across `points`, or 0 when empty.
pub fn peak_reduction(points: &[ScalingPoint]) -> f64 {
    points
        .iter()
        .map(ScalingPoint::reduction_ratio)
        .fold(0.0, f64::max)
}
