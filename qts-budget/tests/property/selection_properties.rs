use proptest::prelude::*;
use qts_budget::{generate, keep_count, select, SeededRandom, Token};
use qts_core::config::SimulationConfig;
use qts_core::QueryMode;

fn arb_mode() -> impl Strategy<Value = QueryMode> {
    prop_oneof![Just(QueryMode::Local), Just(QueryMode::Global)]
}

/// Relevances drawn from a small grid so duplicates are common.
fn arb_tokens() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(0u8..=10, 1..150).prop_map(|vals| {
        vals.into_iter()
            .enumerate()
            .map(|(id, v)| Token::new(id, f64::from(v) / 10.0))
            .collect()
    })
}

fn arb_ratio() -> impl Strategy<Value = f64> {
    prop_oneof![Just(1.0), 0.000_1f64..=1.0]
}

proptest! {
    #[test]
    fn generated_tokens_are_contiguous_and_bounded(
        mode in arb_mode(),
        count in 1usize..200,
        seed in any::<u64>(),
    ) {
        let mut rng = SeededRandom::seeded(seed);
        let tokens = generate(mode, count, &SimulationConfig::default(), &mut rng).unwrap();

        prop_assert_eq!(tokens.len(), count);
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.id(), i);
            prop_assert!((0.0..=1.0).contains(&token.relevance()));
        }
    }

    #[test]
    fn exactly_keep_count_tokens_are_kept(tokens in arb_tokens(), ratio in arb_ratio()) {
        let s = select(&tokens, ratio).unwrap();
        let expected = ((tokens.len() as f64 * ratio).ceil() as usize).min(tokens.len());

        prop_assert_eq!(s.budget.keep_count, expected);
        prop_assert_eq!(s.budget.keep_count, keep_count(tokens.len(), ratio));
        prop_assert_eq!(s.kept_count(), expected);
    }

    #[test]
    fn selection_is_deterministic(tokens in arb_tokens(), ratio in arb_ratio()) {
        let a = select(&tokens, ratio).unwrap();
        let b = select(&tokens, ratio).unwrap();
        prop_assert_eq!(a.kept_ids(), b.kept_ids());
    }

    #[test]
    fn kept_tokens_dominate_pruned_tokens(tokens in arb_tokens(), ratio in arb_ratio()) {
        let s = select(&tokens, ratio).unwrap();
        for kept in s.tokens.iter().filter(|t| t.is_kept()) {
            for pruned in s.tokens.iter().filter(|t| !t.is_kept()) {
                prop_assert!(kept.relevance() >= pruned.relevance());
                if kept.relevance() == pruned.relevance() {
                    prop_assert!(kept.id() < pruned.id(), "tie must favor the lower id");
                }
            }
        }
    }

    #[test]
    fn threshold_is_the_weakest_kept_relevance(tokens in arb_tokens(), ratio in arb_ratio()) {
        let s = select(&tokens, ratio).unwrap();
        let weakest = s
            .tokens
            .iter()
            .filter(|t| t.is_kept())
            .map(Token::relevance)
            .fold(f64::INFINITY, f64::min);
        prop_assert_eq!(s.budget.threshold, Some(weakest));

        let naive = tokens.iter().filter(|t| t.relevance() >= weakest).count();
        prop_assert_eq!(naive, s.budget.keep_count + s.budget.boundary_ties);
    }

    #[test]
    fn full_ratio_keeps_all(tokens in arb_tokens()) {
        let s = select(&tokens, 1.0).unwrap();
        prop_assert!(s.tokens.iter().all(Token::is_kept));
    }
}
