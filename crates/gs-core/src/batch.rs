//! Batch requests: validation, ticket spending and state threading.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::engine::resolve;
use crate::error::GachaResult;
use crate::rng::RandomSource;
use crate::state::{DrawResult, PullMode, SimulationState};

/// Draws in a ticket-funded bonus batch.
pub const BONUS_BATCH_SIZE: u32 = 10;

/// Why a batch request was turned down.
///
/// A rejection is a no-op, not an error: the state is left exactly as it was
/// and no draws are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Bonus batches are always exactly ten draws.
    BonusCountMismatch {
        /// The count that was asked for.
        requested: u32,
    },
    /// No bonus batch ticket to spend.
    InsufficientTickets,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BonusCountMismatch { requested } => write!(
                f,
                "bonus batches are {BONUS_BATCH_SIZE} draws, not {requested}"
            ),
            Self::InsufficientTickets => write!(f, "no bonus ticket available"),
        }
    }
}

/// Result of a batch request.
#[derive(Debug, Clone)]
pub enum BatchOutcome {
    /// Every draw was resolved; `state` is the state after the last one.
    Completed {
        /// Draw results in call order, first draw first.
        results: Vec<DrawResult>,
        /// The state to commit.
        state: SimulationState,
    },
    /// Nothing happened.
    Rejected(Rejection),
}

/// Check whether a request may run against `state`.
pub fn validate(state: &SimulationState, count: u32, mode: PullMode) -> Result<(), Rejection> {
    if mode == PullMode::Bonus {
        if count != BONUS_BATCH_SIZE {
            return Err(Rejection::BonusCountMismatch { requested: count });
        }
        if state.tickets.bonus_batch < 1 {
            return Err(Rejection::InsufficientTickets);
        }
    }
    Ok(())
}

/// Run `count` draws as one transition.
///
/// On acceptance a bonus batch spends its ticket before the first draw. The
/// input state is never touched: on rejection or on a configuration error the
/// caller simply keeps it. A counted request for zero draws is accepted and
/// completes with no results.
pub fn request_pulls<R: RandomSource + ?Sized>(
    catalog: &Catalog,
    state: &SimulationState,
    count: u32,
    mode: PullMode,
    rng: &mut R,
) -> GachaResult<BatchOutcome> {
    if let Err(rejection) = validate(state, count, mode) {
        log::debug!("batch of {count} ({mode}) rejected: {rejection}");
        return Ok(BatchOutcome::Rejected(rejection));
    }

    let mut current = state.clone();
    if mode == PullMode::Bonus {
        current.tickets.bonus_batch -= 1;
    }

    let mut results = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (result, next) = resolve(catalog, current, mode, rng)?;
        results.push(result);
        current = next;
    }

    Ok(BatchOutcome::Completed {
        results,
        state: current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rarity;
    use crate::rng::SequenceSource;
    use crate::testing::test_catalog;

    fn completed(outcome: BatchOutcome) -> (Vec<DrawResult>, SimulationState) {
        match outcome {
            BatchOutcome::Completed { results, state } => (results, state),
            BatchOutcome::Rejected(r) => panic!("unexpected rejection: {r}"),
        }
    }

    #[test]
    fn ten_counted_draws_at_constant_roll() {
        let catalog = test_catalog();
        let mut rng = SequenceSource::constant(0.5);
        let start = SimulationState::default();
        let (results, state) =
            completed(request_pulls(&catalog, &start, 10, PullMode::Counted, &mut rng).unwrap());

        assert_eq!(results.len(), 10);
        assert!(results[..9].iter().all(|r| r.entity.rarity == Rarity::Four));
        // the tenth draw enters with nine uncommon misses, which guarantees one
        assert_eq!(results[9].entity.rarity, Rarity::Five);
        let ordinals: Vec<_> = results.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, (1..=10).collect::<Vec<_>>());
        assert_eq!(state.total_draws, 10);
        assert_eq!(state.milestone_progress, 10);
        assert_eq!(state.pity_rare, 10);
        assert_eq!(state.pity_uncommon, 0);
        assert_eq!(state.pity_featured, 10);
        assert_eq!(state.history.len(), 10);
        // newest first
        assert_eq!(state.history.front().map(|r| r.ordinal), Some(10));
        assert_eq!(state.history.back().map(|r| r.ordinal), Some(1));
        // input untouched
        assert_eq!(start, SimulationState::default());
    }

    #[test]
    fn bonus_without_ticket_is_rejected() {
        let catalog = test_catalog();
        let mut rng = SequenceSource::constant(0.5);
        let start = SimulationState::default();
        let outcome = request_pulls(&catalog, &start, 10, PullMode::Bonus, &mut rng).unwrap();
        assert!(matches!(
            outcome,
            BatchOutcome::Rejected(Rejection::InsufficientTickets)
        ));
        assert_eq!(rng.calls(), 0);
    }

    #[test]
    fn bonus_with_wrong_count_is_rejected() {
        let catalog = test_catalog();
        let mut rng = SequenceSource::constant(0.5);
        let mut start = SimulationState::default();
        start.tickets.bonus_batch = 3;
        let outcome = request_pulls(&catalog, &start, 1, PullMode::Bonus, &mut rng).unwrap();
        assert!(matches!(
            outcome,
            BatchOutcome::Rejected(Rejection::BonusCountMismatch { requested: 1 })
        ));
    }

    #[test]
    fn bonus_spends_one_ticket_and_skips_pity() {
        let catalog = test_catalog();
        let mut rng = SequenceSource::constant(0.5);
        let mut start = SimulationState::default();
        start.tickets.bonus_batch = 2;
        start.pity_rare = 40;

        let (results, state) =
            completed(request_pulls(&catalog, &start, 10, PullMode::Bonus, &mut rng).unwrap());
        assert_eq!(results.len(), 10);
        assert!(results.iter().all(|r| r.mode == PullMode::Bonus));
        assert_eq!(state.tickets.bonus_batch, 1);
        assert_eq!(state.pity_rare, 40);
        assert_eq!(state.total_draws, 0);
        assert_eq!(state.history.len(), 10);
    }

    #[test]
    fn counted_batch_crossing_thirty_earns_ticket_mid_batch() {
        let catalog = test_catalog();
        let mut rng = SequenceSource::constant(0.5);
        let start = SimulationState {
            milestone_progress: 25,
            ..SimulationState::default()
        };
        let (_, state) =
            completed(request_pulls(&catalog, &start, 10, PullMode::Counted, &mut rng).unwrap());
        assert_eq!(state.milestone_progress, 35);
        assert_eq!(state.tickets.bonus_batch, 1);
    }

    #[test]
    fn zero_count_completes_empty() {
        let catalog = test_catalog();
        let mut rng = SequenceSource::constant(0.5);
        let start = SimulationState::default();
        let (results, state) =
            completed(request_pulls(&catalog, &start, 0, PullMode::Counted, &mut rng).unwrap());
        assert!(results.is_empty());
        assert_eq!(state, start);
    }

    #[test]
    fn configuration_error_leaves_caller_state() {
        let catalog = test_catalog();
        let mut rng = SequenceSource::constant(0.5);
        let start = SimulationState {
            banner_index: 5,
            ..SimulationState::default()
        };
        assert!(request_pulls(&catalog, &start, 10, PullMode::Counted, &mut rng).is_err());
        assert_eq!(start.banner_index, 5);
        assert!(start.history.is_empty());
    }
}
