use std::sync::Arc;

use proptest::prelude::*;
use qts_budget::SeededRandom;
use qts_core::config::SimulationConfig;
use qts_core::QueryMode;
use qts_session::ModeController;

fn arb_mode() -> impl Strategy<Value = QueryMode> {
    prop_oneof![Just(QueryMode::Local), Just(QueryMode::Global)]
}

proptest! {
    #[test]
    fn snapshot_always_matches_active_mode(
        seed in any::<u64>(),
        count in 1usize..100,
        modes in prop::collection::vec(arb_mode(), 0..20),
    ) {
        let config = SimulationConfig { token_count: count, ..Default::default() };
        let mut c = ModeController::new(config.clone(), SeededRandom::seeded(seed)).unwrap();

        let mut regenerations = 0;
        for mode in modes {
            let before = c.snapshot();
            let switched = c.set_mode(mode).unwrap();
            let after = c.snapshot();

            prop_assert_eq!(switched, before.mode != mode);
            if !switched {
                prop_assert!(Arc::ptr_eq(&before, &after));
            } else {
                regenerations += 1;
            }

            prop_assert_eq!(after.mode, mode);
            prop_assert_eq!(after.generation, regenerations);
            prop_assert_eq!(after.tokens.len(), count);
            prop_assert_eq!(after.budget.target_ratio, config.target_ratio(mode));
            prop_assert_eq!(after.kept_ids().len(), after.budget.keep_count);
        }
    }
}
