//! Rate pools derived from the catalog for the active banner.

use crate::catalog::{BannerConfig, Catalog, Entity, Rarity};
use crate::error::{GachaError, GachaResult};
use crate::rng::RandomSource;

/// The selectable pools for one banner.
///
/// Cheap to derive, so it is rebuilt for every draw rather than cached.
#[derive(Debug, Clone)]
pub struct BannerPools<'a> {
    /// The banner's featured entity.
    pub featured: &'a Entity,
    /// Rare entities that can drop when the featured coin is lost.
    pub off_rate_rare: Vec<&'a Entity>,
    /// Every uncommon entity.
    pub uncommon: Vec<&'a Entity>,
    /// Every common entity.
    pub common: Vec<&'a Entity>,
}

/// Derive the pools for `banner`.
///
/// The off-rate rare pool holds every non-limited rare entity plus the limited
/// ones that are not featured on this banner.
pub fn resolve_pools<'a>(
    catalog: &'a Catalog,
    banner: &BannerConfig,
) -> GachaResult<BannerPools<'a>> {
    let mut matches = catalog
        .entities()
        .iter()
        .filter(|e| e.id == banner.featured);
    let featured = match (matches.next(), matches.next()) {
        (Some(entity), None) => entity,
        (Some(_), Some(_)) => return Err(GachaError::DuplicateEntity(banner.featured.clone())),
        (None, _) => {
            return Err(GachaError::UnknownFeatured {
                banner: banner.name.clone(),
                featured: banner.featured.clone(),
            });
        }
    };

    let off_rate_rare = catalog
        .by_rarity(Rarity::Six)
        .filter(|e| !e.limited || e.id != banner.featured)
        .collect();

    Ok(BannerPools {
        featured,
        off_rate_rare,
        uncommon: catalog.by_rarity(Rarity::Five).collect(),
        common: catalog.by_rarity(Rarity::Four).collect(),
    })
}

/// Pick uniformly from `pool`; an empty pool is a configuration error.
pub(crate) fn pick_uniform<'a, R: RandomSource + ?Sized>(
    pool: &[&'a Entity],
    rarity: Rarity,
    rng: &mut R,
) -> GachaResult<&'a Entity> {
    if pool.is_empty() {
        return Err(GachaError::EmptyPool(rarity));
    }
    Ok(pool[rng.pick_index(pool.len())])
}
