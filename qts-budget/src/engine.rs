use qts_core::config::SimulationConfig;
use qts_core::errors::QtsResult;
use qts_core::{QueryMode, RandomSource};

use crate::token::{Selection, Token};
use crate::{generator, selector};

/// Generation and selection bound to one validated configuration.
#[derive(Debug, Clone)]
pub struct BudgetEngine {
    config: SimulationConfig,
}

impl BudgetEngine {
    /// Fails with a config error if `config` does not validate.
    pub fn new(config: SimulationConfig) -> QtsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Generate `config.token_count` tokens for `mode`.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        mode: QueryMode,
        rng: &mut R,
    ) -> QtsResult<Vec<Token>> {
        Ok(generator::generate(
            mode,
            self.config.token_count,
            &self.config,
            rng,
        )?)
    }

    /// Select with the target ratio configured for `mode`.
    pub fn select(&self, mode: QueryMode, tokens: &[Token]) -> QtsResult<Selection> {
        Ok(selector::select(tokens, self.config.target_ratio(mode))?)
    }

    /// Generate then select.
    pub fn run<R: RandomSource + ?Sized>(
        &self,
        mode: QueryMode,
        rng: &mut R,
    ) -> QtsResult<Selection> {
        let tokens = self.generate(mode, rng)?;
        self.select(mode, &tokens)
    }
}

impl Default for BudgetEngine {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }
}
