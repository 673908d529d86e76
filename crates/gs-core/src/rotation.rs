//! Banner rotation.

use crate::catalog::Catalog;
use crate::state::SimulationState;

/// Move to the next banner, wrapping at the end of the sequence.
///
/// Rotation clears the featured guarantee and the milestone cycle. The rare
/// and uncommon pity counters, inventory, history and tickets carry over.
pub fn advance(mut state: SimulationState, catalog: &Catalog) -> SimulationState {
    state.banner_index = (state.banner_index + 1) % catalog.banner_count();
    state.pity_featured = 0;
    state.milestone_progress = 0;
    state.claimed_milestone_30 = false;
    log::info!(
        "rotated to banner {} of {} (rare pity carried: {})",
        state.banner_index + 1,
        catalog.banner_count(),
        state.pity_rare
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Entity, Rarity};
    use crate::state::{PullMode, Tickets};
    use crate::testing::test_catalog;

    #[test]
    fn resets_cycle_state_only() {
        let catalog = test_catalog();
        let mut state = SimulationState {
            pity_rare: 42,
            pity_uncommon: 7,
            pity_featured: 90,
            total_draws: 150,
            milestone_progress: 61,
            claimed_milestone_30: true,
            tickets: Tickets {
                bonus_batch: 1,
                next_banner_batch: 2,
            },
            ..SimulationState::default()
        };
        state.record(&Entity::new("four_a", "Four A", Rarity::Four), PullMode::Counted);
        let before = state.clone();

        let after = advance(state, &catalog);

        assert_eq!(after.banner_index, 1);
        assert_eq!(after.pity_featured, 0);
        assert_eq!(after.milestone_progress, 0);
        assert!(!after.claimed_milestone_30);
        assert_eq!(after.pity_rare, before.pity_rare);
        assert_eq!(after.pity_uncommon, before.pity_uncommon);
        assert_eq!(after.total_draws, before.total_draws);
        assert_eq!(after.inventory, before.inventory);
        assert_eq!(after.history, before.history);
        assert_eq!(after.tickets, before.tickets);
    }

    #[test]
    fn wraps_around() {
        let catalog = test_catalog();
        let state = SimulationState {
            banner_index: 1,
            ..SimulationState::default()
        };
        assert_eq!(advance(state, &catalog).banner_index, 0);
    }
}
