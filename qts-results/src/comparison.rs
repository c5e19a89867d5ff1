use serde::Serialize;

/// Baseline vs QTSplus score on one benchmark or task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskComparison {
    pub task: String,
    pub baseline: f64,
    pub qtsplus: f64,
}

impl TaskComparison {
    pub fn new(task: &str, baseline: f64, qtsplus: f64) -> Self {
        Self {
            task: task.to_string(),
            baseline,
            qtsplus,
        }
    }

    /// `qtsplus - baseline`, in points.
    pub fn delta(&self) -> f64 {
        self.qtsplus - self.baseline
    }

    pub fn improved(&self) -> bool {
        self.delta() > 0.0
    }
}

/// Row with the largest positive delta. `None` if nothing improved.
pub fn largest_gain<'a>(
    rows: impl IntoIterator<Item = &'a TaskComparison>,
) -> Option<&'a TaskComparison> {
    rows.into_iter()
        .filter(|r| r.improved())
        .max_by(|a, b| a.delta().total_cmp(&b.delta()))
}

pub fn improved_tasks(rows: &[TaskComparison]) -> Vec<&str> {
    rows.iter()
        .filter(|r| r.improved())
        .map(|r| r.task.as_str())
        .collect()
}

/// Mean of `qtsplus / baseline` across rows; 1.0 means parity.
pub fn mean_retention(rows: &[TaskComparison]) -> f64 {
    let ratios: Vec<f64> = rows
        .iter()
        .filter(|r| r.baseline > 0.0)
        .map(|r| r.qtsplus / r.baseline)
        .collect();
    if ratios.is_empty() {
        return 0.0;
    }
    ratios.iter().sum::<f64>() / ratios.len() as f64
}
