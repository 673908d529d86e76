//! Pull-resolution engine for the gacha simulator.
//!
//! Resolves weighted draws from a tiered catalog under escalating pity
//! counters and a rotating featured banner. State is a plain value threaded
//! through pure transitions ([`engine::resolve`], [`batch::request_pulls`],
//! [`rotation::advance`]); [`Simulator`] owns one such state together with
//! the catalog and an injectable [`RandomSource`].

pub mod batch;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod pool;
pub mod reward;
pub mod rng;
pub mod rotation;
pub mod simulator;
pub mod state;
pub mod stats;

#[cfg(test)]
mod testing;

pub use batch::{BatchOutcome, Rejection};
pub use catalog::{BannerConfig, Catalog, Entity, Rarity};
pub use config::GachaConfig;
pub use engine::{rare_probability, uncommon_probability};
pub use error::{GachaError, GachaResult};
pub use pool::BannerPools;
pub use reward::MilestoneGrant;
pub use rng::{RandomSource, SequenceSource};
pub use simulator::{PullOutcome, Simulator};
pub use state::{DrawResult, PullMode, SimulationState, Tickets};
pub use stats::{RosterEntry, SessionStats};
