use qts_core::config::SimulationConfig;
use qts_core::errors::SimulationError;
use qts_core::{generation_span, QueryMode, RandomSource};
use tracing::debug;

use crate::shape;
use crate::token::Token;

/// Generate `count` tokens with ids `0..count` for `mode`.
///
/// Draws exactly one sample from `rng` per token, in id order. Only the
/// `local`/`global` sections of `config` are read; `count` overrides
/// `config.token_count`.
pub fn generate<R: RandomSource + ?Sized>(
    mode: QueryMode,
    count: usize,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Vec<Token>, SimulationError> {
    if count == 0 {
        return Err(SimulationError::InvalidTokenCount { count });
    }

    let _span = generation_span!(mode, count).entered();

    let tokens: Vec<Token> = (0..count)
        .map(|id| {
            let sample = rng.next_unit();
            let relevance = match mode {
                QueryMode::Local => shape::local_relevance(id, count, &config.local, sample),
                QueryMode::Global => shape::global_relevance(&config.global, sample),
            };
            Token::new(id, relevance)
        })
        .collect();

    debug!(
        peak = tokens.iter().map(Token::relevance).fold(0.0, f64::max),
        "generated relevance sequence"
    );

    Ok(tokens)
}
