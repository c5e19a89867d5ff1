use serde::{Deserialize, Serialize};

/// Result tables the catalog holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    TokenScaling,
    GeneralBenchmarks,
    TempCompass,
    MvBench,
    Ablation,
}

/// Tabs of the results section. Accuracy is shown first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultsTab {
    Efficiency,
    #[default]
    Accuracy,
    Ablation,
}

impl ResultsTab {
    pub const ALL: [ResultsTab; 3] = [Self::Efficiency, Self::Accuracy, Self::Ablation];

    pub fn tables(self) -> &'static [Table] {
        match self {
            Self::Efficiency => &[Table::TokenScaling],
            Self::Accuracy => &[Table::GeneralBenchmarks, Table::TempCompass, Table::MvBench],
            Self::Ablation => &[Table::Ablation],
        }
    }
}
