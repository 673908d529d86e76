pub mod banners;
pub mod odds;
pub mod play;
pub mod roster;
pub mod simulate;

use std::path::Path;

use colored::{ColoredString, Colorize};
use gs_core::{Catalog, GachaConfig, Rarity, Simulator};

/// Build a configuration from the shared command-line options.
fn config(catalog: Option<&Path>, seed: Option<u64>) -> GachaConfig {
    let mut config = GachaConfig::default();
    if let Some(path) = catalog {
        config = config.with_catalog_path(path);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    config
}

/// Load the catalog named on the command line, or the built-in one.
fn load_catalog(catalog: Option<&Path>) -> Result<Catalog, String> {
    config(catalog, None)
        .load_catalog()
        .map_err(|e| e.to_string())
}

/// Create a simulator at the initial state.
fn simulator(catalog: Option<&Path>, seed: Option<u64>) -> Result<Simulator, String> {
    Simulator::from_config(&config(catalog, seed)).map_err(|e| e.to_string())
}

/// Star string coloured by tier.
fn stars(rarity: Rarity) -> ColoredString {
    let s = "★".repeat(usize::from(rarity.stars()));
    match rarity {
        Rarity::Six => s.yellow().bold(),
        Rarity::Five => s.magenta(),
        Rarity::Four => s.dimmed(),
    }
}
