//! Read-only summaries for presentation layers.

use serde::Serialize;

use crate::catalog::{Catalog, Entity, Rarity};
use crate::engine::rare_probability;
use crate::reward::NEXT_BANNER_MILESTONE;
use crate::state::{PullMode, SimulationState};

/// Aggregate numbers over a state's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionStats {
    /// All draws in the history, counted and bonus.
    pub draws: usize,
    /// Draws made with bonus tickets.
    pub bonus_draws: usize,
    /// Rare outcomes.
    pub six_star: usize,
    /// Uncommon outcomes.
    pub five_star: usize,
    /// Common outcomes.
    pub four_star: usize,
    /// Rare outcomes that were limited entities.
    pub limited: usize,
    /// Distinct entities owned.
    pub distinct_owned: usize,
    /// Rare chance of the next counted draw.
    pub next_rare_rate: f64,
    /// Milestone progress, capped at the last milestone for display.
    pub milestone_display: u32,
}

impl SessionStats {
    /// Draws of one rarity.
    pub fn count(&self, rarity: Rarity) -> usize {
        match rarity {
            Rarity::Six => self.six_star,
            Rarity::Five => self.five_star,
            Rarity::Four => self.four_star,
        }
    }
}

/// Summarize `state`.
pub fn summarize(state: &SimulationState) -> SessionStats {
    let mut stats = SessionStats {
        draws: state.history.len(),
        distinct_owned: state.inventory.values().filter(|&&n| n > 0).count(),
        next_rare_rate: rare_probability(state.pity_rare, PullMode::Counted),
        milestone_display: state.milestone_progress.min(NEXT_BANNER_MILESTONE),
        ..SessionStats::default()
    };

    for record in &state.history {
        if record.mode == PullMode::Bonus {
            stats.bonus_draws += 1;
        }
        match record.entity.rarity {
            Rarity::Six => {
                stats.six_star += 1;
                if record.entity.limited {
                    stats.limited += 1;
                }
            }
            Rarity::Five => stats.five_star += 1,
            Rarity::Four => stats.four_star += 1,
        }
    }
    stats
}

/// One catalog entity with the number of copies owned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry<'a> {
    /// The catalog entity.
    pub entity: &'a Entity,
    /// Copies owned.
    pub owned: u32,
}

/// Catalog entities in catalog order with owned counts, optionally filtered
/// to one rarity.
pub fn roster<'a>(
    catalog: &'a Catalog,
    state: &SimulationState,
    rarity: Option<Rarity>,
) -> Vec<RosterEntry<'a>> {
    catalog
        .entities()
        .iter()
        .filter(|e| rarity.is_none_or(|r| e.rarity == r))
        .map(|entity| RosterEntry {
            entity,
            owned: state.owned(&entity.id),
        })
        .collect()
}
