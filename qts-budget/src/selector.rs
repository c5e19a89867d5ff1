//! Top-n budget selection by ranked position.
//!
//! Tokens are ranked by relevance descending, ties broken by ascending id,
//! and the first `keep_count` ranks are kept. A plain `relevance >= threshold`
//! filter is not equivalent: duplicates straddling the threshold would all be
//! kept.

use std::cmp::Ordering;

use qts_core::errors::SimulationError;
use qts_core::selection_span;
use tracing::debug;

use crate::token::{Budget, Selection, Token};

/// `clamp(ceil(count * target_ratio), 0, count)`.
pub fn keep_count(count: usize, target_ratio: f64) -> usize {
    let raw = (count as f64 * target_ratio).ceil();
    raw.clamp(0.0, count as f64) as usize
}

/// Indices into `tokens`, best first.
pub fn rank(tokens: &[Token]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tokens.len()).collect();
    order.sort_by(|&a, &b| compare(&tokens[a], &tokens[b]));
    order
}

fn compare(a: &Token, b: &Token) -> Ordering {
    b.relevance()
        .total_cmp(&a.relevance())
        .then_with(|| a.id().cmp(&b.id()))
}

/// Mark exactly `keep_count(tokens.len(), target_ratio)` tokens as kept.
///
/// Any previous `kept` marks on the input are ignored. Output preserves input
/// order. Fails only when `target_ratio` is outside `(0, 1]`.
pub fn select(tokens: &[Token], target_ratio: f64) -> Result<Selection, SimulationError> {
    if !(target_ratio > 0.0 && target_ratio <= 1.0) {
        return Err(SimulationError::InvalidTargetRatio {
            ratio: target_ratio,
        });
    }

    let _span = selection_span!(tokens.len(), target_ratio).entered();

    let keep = keep_count(tokens.len(), target_ratio);
    let order = rank(tokens);

    let mut kept = vec![false; tokens.len()];
    for &idx in &order[..keep] {
        kept[idx] = true;
    }

    let threshold = keep
        .checked_sub(1)
        .map(|last| tokens[order[last]].relevance());
    let boundary_ties = match threshold {
        Some(t) => order[keep..]
            .iter()
            .filter(|&&idx| tokens[idx].relevance() == t)
            .count(),
        None => 0,
    };

    debug!(keep, ?threshold, boundary_ties, "budget selected");

    Ok(Selection {
        budget: Budget {
            target_ratio,
            keep_count: keep,
            threshold,
            boundary_ties,
        },
        tokens: tokens
            .iter()
            .zip(kept)
            .map(|(token, kept)| token.with_kept(kept))
            .collect(),
    })
}
