use serde::Serialize;

/// Model variants compared in the ablation study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AblationVariant {
    /// Uniform frame sampling at the same budget.
    #[serde(rename = "UNIF")]
    UniformSampling,
    /// Token selection without the temporal re-encoder.
    #[serde(rename = "nREENC")]
    NoReencoder,
    /// Full 3B selector with re-encoder.
    #[serde(rename = "QTS3B")]
    Full,
}

impl AblationVariant {
    pub const ALL: [AblationVariant; 3] = [Self::UniformSampling, Self::NoReencoder, Self::Full];

    pub fn short_name(self) -> &'static str {
        match self {
            Self::UniformSampling => "UNIF",
            Self::NoReencoder => "nREENC",
            Self::Full => "QTS3B",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AblationRow {
    pub task: String,
    pub uniform: f64,
    pub no_reencoder: f64,
    pub full: f64,
}

impl AblationRow {
    pub fn new(task: &str, uniform: f64, no_reencoder: f64, full: f64) -> Self {
        Self {
            task: task.to_string(),
            uniform,
            no_reencoder,
            full,
        }
    }

    pub fn score(&self, variant: AblationVariant) -> f64 {
        match variant {
            AblationVariant::UniformSampling => self.uniform,
            AblationVariant::NoReencoder => self.no_reencoder,
            AblationVariant::Full => self.full,
        }
    }

    /// Highest-scoring variant; on a tie the later (more complete) one wins.
    pub fn best_variant(&self) -> AblationVariant {
        AblationVariant::ALL
            .into_iter()
            .max_by(|a, b| self.score(*a).total_cmp(&self.score(*b)))
            .unwrap_or(AblationVariant::Full)
    }

    /// Points the re-encoder adds on top of selection alone.
    pub fn reencoder_gain(&self) -> f64 {
        self.full - self.no_reencoder
    }
}
