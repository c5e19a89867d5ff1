//! The published numbers.

use serde::Serialize;

use crate::ablation::{AblationRow, AblationVariant};
use crate::comparison::{self, TaskComparison};
use crate::scaling::{self, ScalingPoint};
use crate::tab::{ResultsTab, Table};

/// Every result table shown on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsCatalog {
    /// Visual tokens vs input frames.
    pub token_scaling: Vec<ScalingPoint>,
    /// Video-MME, LVBench, MLVU-Test accuracy.
    pub general_benchmarks: Vec<TaskComparison>,
    /// TempCompass per-dimension accuracy.
    pub temp_compass: Vec<TaskComparison>,
    /// MVBench fine-grained subset.
    pub mv_bench: Vec<TaskComparison>,
    /// Uniform sampling vs no re-encoder vs full model.
    pub ablation: Vec<AblationRow>,
}

impl ResultsCatalog {
    /// The paper's tables.
    pub fn published() -> Self {
        let point = |frames: u32, baseline_tokens: u32, qts_tokens: u32| ScalingPoint {
            frames,
            baseline_tokens,
            qts_tokens,
        };

        Self {
            token_scaling: vec![
                point(100, 28_000, 3_500),
                point(200, 56_000, 7_000),
                point(300, 84_000, 10_000),
                point(400, 112_000, 13_000),
                point(500, 140_000, 16_000),
                point(600, 168_000, 19_000),
            ],
            general_benchmarks: vec![
                TaskComparison::new("Video-MME", 57.81, 57.07),
                TaskComparison::new("LVBench", 39.44, 37.90),
                TaskComparison::new("MLVU-Test", 31.78, 27.37),
            ],
            temp_compass: vec![
                TaskComparison::new("Action", 97.93, 97.04),
                TaskComparison::new("Attribute", 74.31, 69.20),
                TaskComparison::new("Direction", 43.58, 64.07),
                TaskComparison::new("Order", 63.91, 69.54),
                TaskComparison::new("Speed", 51.42, 49.27),
            ],
            mv_bench: vec![
                TaskComparison::new("Action Seq", 78.00, 69.00),
                TaskComparison::new("Unexpected", 79.50, 82.50),
                TaskComparison::new("Object Exist", 93.50, 92.00),
                TaskComparison::new("Scene Trans", 91.50, 91.00),
                TaskComparison::new("Moving Attr", 96.50, 91.50),
            ],
            ablation: vec![
                AblationRow::new("TC: Order", 58.61, 61.26, 67.88),
                AblationRow::new("TC: Attribute", 57.99, 60.76, 67.01),
                AblationRow::new("MB: Character", 56.00, 68.50, 71.50),
                AblationRow::new("MB: Counterfact", 56.50, 67.00, 74.00),
                AblationRow::new("MB: Fine-Grain", 50.50, 54.50, 60.00),
            ],
        }
    }

    /// Headline token reduction (the "-89%" figure).
    pub fn peak_reduction(&self) -> f64 {
        scaling::peak_reduction(&self.token_scaling)
    }

    /// Largest gain across the fine-grained accuracy tables.
    pub fn largest_gain(&self) -> Option<&TaskComparison> {
        comparison::largest_gain(self.temp_compass.iter().chain(&self.mv_bench))
    }

    /// Mean accuracy retained on the general benchmarks (near parity ≈ 1.0).
    pub fn general_retention(&self) -> f64 {
        comparison::mean_retention(&self.general_benchmarks)
    }

    /// True when the full model wins every ablation row.
    pub fn full_model_wins(&self) -> bool {
        self.ablation
            .iter()
            .all(|row| row.best_variant() == AblationVariant::Full)
    }

    /// Tables for `tab`, serialized as one JSON object keyed by table name.
    pub fn tab_json(&self, tab: ResultsTab) -> serde_json::Result<serde_json::Value> {
        let mut out = serde_json::Map::new();
        for table in tab.tables() {
            let (key, value) = match table {
                Table::TokenScaling => ("token_scaling", serde_json::to_value(&self.token_scaling)?),
                Table::GeneralBenchmarks => (
                    "general_benchmarks",
                    serde_json::to_value(&self.general_benchmarks)?,
                ),
                Table::TempCompass => ("temp_compass", serde_json::to_value(&self.temp_compass)?),
                Table::MvBench => ("mv_bench", serde_json::to_value(&self.mv_bench)?),
                Table::Ablation => ("ablation", serde_json::to_value(&self.ablation)?),
            };
            out.insert(key.to_string(), value);
        }
        Ok(serde_json::Value::Object(out))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for ResultsCatalog {
    fn default() -> Self {
        Self::published()
    }
}
