//! Single-draw resolution: rarity thresholds and the pity state machine.
//!
//! A draw is resolved in order:
//!
//! 1. On a counted draw with the featured counter at its ceiling, the
//!    featured entity is forced and no random value is consumed.
//! 2. Otherwise one uniform roll is compared against the cumulative
//!    thresholds `p6` and `p6 + p5`.
//! 3. A rare outcome flips a fair coin for featured vs off-rate; the chosen
//!    pool is then sampled uniformly.
//!
//! Bonus draws use the base rates and leave every counter untouched; they
//! only add to the inventory and history.

use crate::catalog::{Catalog, Entity, Rarity};
use crate::error::GachaResult;
use crate::pool::{BannerPools, pick_uniform, resolve_pools};
use crate::reward::apply_milestones;
use crate::rng::RandomSource;
use crate::state::{
    DrawResult, FEATURED_PITY_CEILING, PullMode, RARE_PITY_CEILING, SimulationState,
    UNCOMMON_PITY_CEILING,
};

/// Base chance of a rare outcome.
pub const BASE_RARE_RATE: f64 = 0.008;
/// Base chance of an uncommon outcome.
pub const BASE_UNCOMMON_RATE: f64 = 0.08;
/// Rare pity value from which the rare rate starts climbing.
pub const SOFT_PITY_START: u32 = 65;
/// Rare rate added per pity step past [`SOFT_PITY_START`].
pub const SOFT_PITY_STEP: f64 = 0.025;
/// Chance that a rare outcome is the featured entity.
pub const FEATURED_SHARE: f64 = 0.5;

/// Rare chance for the next draw.
pub fn rare_probability(pity_rare: u32, mode: PullMode) -> f64 {
    if !mode.is_counted() {
        return BASE_RARE_RATE;
    }
    if pity_rare >= RARE_PITY_CEILING - 1 {
        return 1.0;
    }
    let mut p = BASE_RARE_RATE;
    if pity_rare >= SOFT_PITY_START {
        p += SOFT_PITY_STEP * f64::from(pity_rare - SOFT_PITY_START);
    }
    p
}

/// Uncommon chance for the next draw.
pub fn uncommon_probability(pity_uncommon: u32, mode: PullMode) -> f64 {
    if mode.is_counted() && pity_uncommon >= UNCOMMON_PITY_CEILING - 1 {
        1.0
    } else {
        BASE_UNCOMMON_RATE
    }
}

/// Resolve one draw against the active banner.
///
/// Takes the current state by value and returns the result together with the
/// next state. Only configuration errors (unknown featured entity, an empty
/// pool, a banner index past the end of the catalog) fail.
pub fn resolve<R: RandomSource + ?Sized>(
    catalog: &Catalog,
    mut state: SimulationState,
    mode: PullMode,
    rng: &mut R,
) -> GachaResult<(DrawResult, SimulationState)> {
    let banner = catalog.banner(state.banner_index)?;
    let pools = resolve_pools(catalog, banner)?;
    let counted = mode.is_counted();

    let entity = if counted && state.pity_featured >= FEATURED_PITY_CEILING - 1 {
        state.pity_rare = 0;
        state.pity_uncommon = 0;
        state.pity_featured = 0;
        pools.featured
    } else {
        roll(&pools, &mut state, mode, rng)?
    };

    let result = state.record(entity, mode);
    log::debug!(
        "draw #{} ({mode}): {} {}{}",
        result.ordinal,
        entity.rarity,
        entity.name,
        if result.is_new { " [new]" } else { "" }
    );

    if counted {
        state.total_draws += 1;
        state.milestone_progress += 1;
        apply_milestones(&mut state);
    }

    Ok((result, state))
}

/// Roll rarity, then pick an entity and advance pity counters.
fn roll<'a, R: RandomSource + ?Sized>(
    pools: &BannerPools<'a>,
    state: &mut SimulationState,
    mode: PullMode,
    rng: &mut R,
) -> GachaResult<&'a Entity> {
    let counted = mode.is_counted();
    let p6 = rare_probability(state.pity_rare, mode);
    let p5 = uncommon_probability(state.pity_uncommon, mode);
    let r = rng.next_f64();

    if r < p6 {
        let entity = if rng.next_f64() < FEATURED_SHARE {
            if counted {
                state.pity_featured = 0;
            }
            pools.featured
        } else {
            if counted {
                state.pity_featured += 1;
            }
            pick_uniform(&pools.off_rate_rare, Rarity::Six, rng)?
        };
        if counted {
            state.pity_rare = 0;
            state.pity_uncommon = 0;
        }
        Ok(entity)
    } else if r < p6 + p5 {
        let entity = pick_uniform(&pools.uncommon, Rarity::Five, rng)?;
        if counted {
            state.pity_uncommon = 0;
            state.pity_rare += 1;
            state.pity_featured += 1;
        }
        Ok(entity)
    } else {
        let entity = pick_uniform(&pools.common, Rarity::Four, rng)?;
        if counted {
            state.pity_rare += 1;
            state.pity_uncommon += 1;
            state.pity_featured += 1;
        }
        Ok(entity)
    }
}
