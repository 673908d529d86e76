//! The simulation state aggregate and draw records.
//!
//! `SimulationState` is a plain value. Transitions take one in and hand a new
//! one back; nothing holds on to a previous snapshot once a transition has
//! completed.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::catalog::Entity;

/// Hard guarantee for the rare tier: at this many misses the next counted
/// draw is rare.
pub const RARE_PITY_CEILING: u32 = 80;
/// Hard guarantee for the uncommon tier.
pub const UNCOMMON_PITY_CEILING: u32 = 10;
/// Counted draws after which the featured entity is forced.
pub const FEATURED_PITY_CEILING: u32 = 120;

/// Whether a draw counts towards pity and milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PullMode {
    /// A regular draw: reads and advances every pity counter.
    #[default]
    Counted,
    /// A ticket-funded draw: base rates only, no pity or milestone effect.
    Bonus,
}

impl PullMode {
    /// True for [`PullMode::Counted`].
    pub fn is_counted(self) -> bool {
        matches!(self, Self::Counted)
    }
}

impl std::fmt::Display for PullMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Counted => write!(f, "counted"),
            Self::Bonus => write!(f, "bonus"),
        }
    }
}

/// Ticket balances earned from milestones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tickets {
    /// Free ten-draw batches usable on any banner (30-draw milestone).
    pub bonus_batch: u32,
    /// Free ten-draw batches for the next banner (60-draw milestone).
    pub next_banner_batch: u32,
}

/// The outcome of a single draw, as stored in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// The entity obtained.
    pub entity: Entity,
    /// First copy of this entity ever obtained.
    pub is_new: bool,
    /// 1-based position in the cumulative history.
    pub ordinal: usize,
    /// The mode the draw was made in.
    pub mode: PullMode,
}

/// The single mutable aggregate of a simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Position in the banner sequence.
    pub banner_index: usize,
    /// Counted draws since the last rare outcome.
    pub pity_rare: u32,
    /// Counted draws since the last uncommon or rare outcome.
    pub pity_uncommon: u32,
    /// Counted draws since the featured entity was last obtained.
    pub pity_featured: u32,
    /// Counted draws over the whole session.
    pub total_draws: u32,
    /// Counted draws in the current milestone cycle.
    pub milestone_progress: u32,
    /// Owned copies per entity id.
    pub inventory: BTreeMap<String, u32>,
    /// Draw log, newest first.
    pub history: VecDeque<DrawResult>,
    /// Ticket balances.
    pub tickets: Tickets,
    /// Whether the 30-draw milestone was already paid out this cycle.
    pub claimed_milestone_30: bool,
}

impl SimulationState {
    /// Copies of `id` currently owned.
    pub fn owned(&self, id: &str) -> u32 {
        self.inventory.get(id).copied().unwrap_or(0)
    }

    /// Add one copy of `entity` to the inventory and prepend the draw to the
    /// history. Returns the recorded result.
    pub(crate) fn record(&mut self, entity: &Entity, mode: PullMode) -> DrawResult {
        let count = self.inventory.entry(entity.id.clone()).or_insert(0);
        let is_new = *count == 0;
        *count += 1;

        let result = DrawResult {
            entity: entity.clone(),
            is_new,
            ordinal: self.history.len() + 1,
            mode,
        };
        self.history.push_front(result.clone());
        result
    }
}
