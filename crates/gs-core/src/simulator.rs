//! The state owner and public surface of the engine.

use rand::rngs::StdRng;

use crate::batch::{BatchOutcome, Rejection, request_pulls};
use crate::catalog::{BannerConfig, Catalog};
use crate::config::GachaConfig;
use crate::error::GachaResult;
use crate::pool::{BannerPools, resolve_pools};
use crate::rng::RandomSource;
use crate::rotation::advance;
use crate::state::{DrawResult, PullMode, SimulationState};

/// What a pull request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullOutcome {
    /// The batch ran and its state was committed. May be empty for a counted
    /// request of zero draws.
    Completed(Vec<DrawResult>),
    /// The request was a no-op; the state is unchanged.
    Rejected(Rejection),
}

impl PullOutcome {
    /// The draws made, empty when rejected.
    pub fn results(&self) -> &[DrawResult] {
        match self {
            Self::Completed(results) => results,
            Self::Rejected(_) => &[],
        }
    }

    /// True when the request was turned down.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Owns the catalog, the current state and the random source.
pub struct Simulator<R = StdRng> {
    catalog: Catalog,
    state: SimulationState,
    rng: R,
}

impl Simulator<StdRng> {
    /// Load the configured catalog and seed the RNG from the configuration.
    pub fn from_config(config: &GachaConfig) -> GachaResult<Self> {
        let catalog = config.load_catalog()?;
        Ok(Self::with_source(catalog, config.rng()))
    }
}

impl<R: RandomSource> Simulator<R> {
    /// Create a simulator at the initial state with an explicit random source.
    pub fn with_source(catalog: Catalog, rng: R) -> Self {
        Self {
            catalog,
            state: SimulationState::default(),
            rng,
        }
    }

    /// Start from an existing state snapshot instead of the initial one.
    pub fn with_state(mut self, state: SimulationState) -> Self {
        self.state = state;
        self
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The catalog in use.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active banner.
    pub fn current_banner(&self) -> GachaResult<&BannerConfig> {
        self.catalog.banner(self.state.banner_index)
    }

    /// Rate pools of the active banner.
    pub fn pools(&self) -> GachaResult<BannerPools<'_>> {
        resolve_pools(&self.catalog, self.current_banner()?)
    }

    /// Request `count` draws in `mode`.
    ///
    /// A bonus request that is not exactly ten draws, or that has no ticket
    /// to spend, comes back as [`PullOutcome::Rejected`] and changes nothing.
    /// Configuration errors leave the state as it was.
    pub fn request_pulls(&mut self, count: u32, mode: PullMode) -> GachaResult<PullOutcome> {
        match request_pulls(&self.catalog, &self.state, count, mode, &mut self.rng)? {
            BatchOutcome::Completed { results, state } => {
                self.state = state;
                Ok(PullOutcome::Completed(results))
            }
            BatchOutcome::Rejected(rejection) => Ok(PullOutcome::Rejected(rejection)),
        }
    }

    /// Rotate to the next banner.
    pub fn advance_banner(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = advance(state, &self.catalog);
    }

    /// Discard everything and return to the initial state.
    pub fn reset_all(&mut self) {
        log::info!(
            "reset after {} draws",
            self.state.history.len()
        );
        self.state = SimulationState::default();
    }
}
