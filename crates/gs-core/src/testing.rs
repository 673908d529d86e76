//! Shared fixtures for unit tests.

use crate::catalog::{BannerConfig, Catalog, Entity, Rarity};

/// Two limited rares featured on two banners, one standard rare, two
/// uncommons and three commons.
pub(crate) fn test_catalog() -> Catalog {
    Catalog::new(
        vec![
            Entity::new("up_a", "Up A", Rarity::Six).limited(),
            Entity::new("up_b", "Up B", Rarity::Six).limited(),
            Entity::new("std_six", "Standard Six", Rarity::Six),
            Entity::new("five_a", "Five A", Rarity::Five),
            Entity::new("five_b", "Five B", Rarity::Five),
            Entity::new("four_a", "Four A", Rarity::Four),
            Entity::new("four_b", "Four B", Rarity::Four),
            Entity::new("four_c", "Four C", Rarity::Four),
        ],
        vec![
            BannerConfig::new(1, "First", "up_a"),
            BannerConfig::new(2, "Second", "up_b"),
        ],
    )
    .expect("fixture catalog is valid")
}
