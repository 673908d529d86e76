//! Property tests for the pity state machine over the built-in catalog.

use gs_core::engine::resolve;
use gs_core::rotation::advance;
use gs_core::{Catalog, PullMode, Rarity, SequenceSource, SimulationState, Simulator};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

fn counters() -> impl Strategy<Value = SimulationState> {
    (0u32..80, 0u32..10, 0u32..120, 0usize..3).prop_map(|(rare, uncommon, featured, banner)| {
        SimulationState {
            banner_index: banner,
            pity_rare: rare,
            pity_uncommon: uncommon,
            pity_featured: featured,
            ..SimulationState::default()
        }
    })
}

proptest! {
    #[test]
    fn rare_pity_resets_or_increments(start in counters(), seed in any::<u64>()) {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(seed);
        let (result, next) = resolve(&catalog, start.clone(), PullMode::Counted, &mut rng).unwrap();

        let forced = start.pity_featured >= 119;
        if result.entity.rarity == Rarity::Six || forced {
            prop_assert_eq!(next.pity_rare, 0);
        } else {
            prop_assert_eq!(next.pity_rare, start.pity_rare + 1);
        }
    }

    #[test]
    fn featured_pity_resets_only_on_featured(start in counters(), seed in any::<u64>()) {
        let catalog = catalog();
        let featured = catalog.banner(start.banner_index).unwrap().featured.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        let (result, next) = resolve(&catalog, start.clone(), PullMode::Counted, &mut rng).unwrap();

        if result.entity.id == featured {
            prop_assert_eq!(next.pity_featured, 0);
        } else {
            prop_assert_eq!(next.pity_featured, start.pity_featured + 1);
        }
    }

    #[test]
    fn hard_pity_always_rare(seed in any::<u64>(), uncommon in 0u32..10) {
        let catalog = catalog();
        let start = SimulationState {
            pity_rare: 79,
            pity_uncommon: uncommon,
            ..SimulationState::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let (result, _) = resolve(&catalog, start, PullMode::Counted, &mut rng).unwrap();
        prop_assert_eq!(result.entity.rarity, Rarity::Six);
    }

    #[test]
    fn featured_guarantee_ignores_roll(value in 0.0f64..1.0, rare in 0u32..80) {
        let catalog = catalog();
        let start = SimulationState {
            pity_rare: rare,
            pity_featured: 119,
            ..SimulationState::default()
        };
        let mut rng = SequenceSource::constant(value);
        let (result, next) = resolve(&catalog, start, PullMode::Counted, &mut rng).unwrap();
        prop_assert_eq!(result.entity.id.as_str(), "laevatain");
        prop_assert_eq!(next.pity_rare, 0);
        prop_assert_eq!(next.pity_uncommon, 0);
        prop_assert_eq!(next.pity_featured, 0);
    }

    #[test]
    fn bonus_draws_leave_counters_alone(start in counters(), seed in any::<u64>()) {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(seed);
        let (result, next) = resolve(&catalog, start.clone(), PullMode::Bonus, &mut rng).unwrap();

        prop_assert_eq!(next.pity_rare, start.pity_rare);
        prop_assert_eq!(next.pity_uncommon, start.pity_uncommon);
        prop_assert_eq!(next.pity_featured, start.pity_featured);
        prop_assert_eq!(next.total_draws, start.total_draws);
        prop_assert_eq!(next.milestone_progress, start.milestone_progress);
        prop_assert_eq!(next.history.len(), start.history.len() + 1);
        prop_assert_eq!(next.owned(&result.entity.id), start.owned(&result.entity.id) + 1);
    }

    #[test]
    fn history_entities_are_owned(batches in prop::collection::vec(1u32..=10, 1..12), seed in any::<u64>()) {
        let mut sim = Simulator::with_source(catalog(), StdRng::seed_from_u64(seed));
        for count in batches {
            sim.request_pulls(count, PullMode::Counted).unwrap();
            if sim.state().tickets.bonus_batch > 0 {
                sim.request_pulls(10, PullMode::Bonus).unwrap();
            }
        }
        let state = sim.state();
        for record in &state.history {
            prop_assert!(state.owned(&record.entity.id) >= 1);
        }
        let ordinals: Vec<_> = state.history.iter().map(|r| r.ordinal).collect();
        let expected: Vec<_> = (1..=state.history.len()).rev().collect();
        prop_assert_eq!(ordinals, expected);
        prop_assert!(state.pity_rare < 80);
        prop_assert!(state.pity_uncommon < 10);
        prop_assert!(state.pity_featured < 120);
    }

    #[test]
    fn rotation_keeps_water_level(start in counters(), draws in 0u32..200) {
        let catalog = catalog();
        let start = SimulationState { total_draws: draws, milestone_progress: draws, ..start };
        let next = advance(start.clone(), &catalog);
        prop_assert_eq!(next.banner_index, (start.banner_index + 1) % catalog.banner_count());
        prop_assert_eq!(next.pity_rare, start.pity_rare);
        prop_assert_eq!(next.pity_uncommon, start.pity_uncommon);
        prop_assert_eq!(next.total_draws, start.total_draws);
        prop_assert_eq!(next.pity_featured, 0);
        prop_assert_eq!(next.milestone_progress, 0);
        prop_assert!(!next.claimed_milestone_30);
    }
}
