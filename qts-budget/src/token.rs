use serde::Serialize;

/// One synthetic unit of visual evidence.
///
/// `kept` is derived: only [`select`](crate::selector::select) sets it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Token {
    id: usize,
    relevance: f64,
    kept: bool,
}

impl Token {
    /// A pruned token. `relevance` is clamped to `[0, 1]`; NaN becomes 0.
    pub fn new(id: usize, relevance: f64) -> Self {
        let relevance = if relevance.is_nan() {
            0.0
        } else {
            // `+ 0.0` normalizes -0.0 so ranking sees a single zero.
            relevance.clamp(0.0, 1.0) + 0.0
        };
        Self {
            id,
            relevance,
            kept: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Simulated cross-attention score in `[0, 1]`.
    pub fn relevance(&self) -> f64 {
        self.relevance
    }

    pub fn is_kept(&self) -> bool {
        self.kept
    }

    pub(crate) fn with_kept(mut self, kept: bool) -> Self {
        self.kept = kept;
        self
    }
}

/// Retention budget derived from a token sequence and a target ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Budget {
    /// Requested fraction of tokens to keep, in `(0, 1]`.
    pub target_ratio: f64,
    /// `clamp(ceil(n * target_ratio), 0, n)`.
    pub keep_count: usize,
    /// Relevance of the lowest-ranked kept token. `None` when nothing is kept.
    pub threshold: Option<f64>,
    /// Pruned tokens whose relevance equals `threshold`. These lost the
    /// tie-break on id.
    pub boundary_ties: usize,
}

/// Tokens with `kept` marked, plus the budget that marked them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub budget: Budget,
    /// Same order as the input sequence.
    pub tokens: Vec<Token>,
}

impl Selection {
    /// Ids of kept tokens, in sequence order.
    pub fn kept_ids(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .filter(|t| t.is_kept())
            .map(Token::id)
            .collect()
    }

    pub fn kept_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_kept()).count()
    }

    /// Fraction of tokens pruned.
    pub fn compression(&self) -> f64 {
        if self.tokens.is_empty() {
            return 0.0;
        }
        1.0 - self.kept_count() as f64 / self.tokens.len() as f64
    }
}
