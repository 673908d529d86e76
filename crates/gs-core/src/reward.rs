//! Milestone ticket grants.

use serde::{Deserialize, Serialize};

use crate::state::SimulationState;

/// Counted draws in a cycle that pay out one bonus batch ticket.
pub const BONUS_MILESTONE: u32 = 30;
/// Counted draws in a cycle that pay out one next-banner batch ticket.
pub const NEXT_BANNER_MILESTONE: u32 = 60;

/// A ticket granted by a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneGrant {
    /// One bonus ten-draw ticket.
    BonusBatch,
    /// One ten-draw ticket for the next banner.
    NextBannerBatch,
}

impl std::fmt::Display for MilestoneGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BonusBatch => write!(f, "bonus ten-draw ticket"),
            Self::NextBannerBatch => write!(f, "next-banner ten-draw ticket"),
        }
    }
}

/// Apply milestone rules after a counted draw and return what was granted.
///
/// The 60-draw grant fires on exact equality only, so a cycle that never
/// passes through 60 one step at a time never pays it.
pub fn apply_milestones(state: &mut SimulationState) -> Vec<MilestoneGrant> {
    let mut grants = Vec::new();

    if state.milestone_progress >= BONUS_MILESTONE && !state.claimed_milestone_30 {
        state.tickets.bonus_batch += 1;
        state.claimed_milestone_30 = true;
        grants.push(MilestoneGrant::BonusBatch);
    }

    if state.milestone_progress == NEXT_BANNER_MILESTONE {
        state.tickets.next_banner_batch += 1;
        grants.push(MilestoneGrant::NextBannerBatch);
    }

    for grant in &grants {
        log::info!(
            "milestone reached at {} draws: granted {grant}",
            state.milestone_progress
        );
    }
    grants
}
