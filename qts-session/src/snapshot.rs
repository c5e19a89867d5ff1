use qts_budget::{Budget, Selection, Token};
use qts_core::QueryMode;
use serde::Serialize;

/// Read-only view handed to the rendering layer after each regeneration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub mode: QueryMode,
    /// 0 for the snapshot built at construction, +1 per regeneration.
    pub generation: u64,
    pub tokens: Vec<Token>,
    pub budget: Budget,
}

impl Snapshot {
    pub(crate) fn from_selection(mode: QueryMode, generation: u64, selection: Selection) -> Self {
        Self {
            mode,
            generation,
            tokens: selection.tokens,
            budget: selection.budget,
        }
    }

    pub fn kept_ids(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .filter(|t| t.is_kept())
            .map(Token::id)
            .collect()
    }
}
