//! Static catalog data: entities, rarities and banners.
//!
//! The catalog is read-only for the lifetime of a simulation. It is validated
//! once on construction so that every banner's featured id resolves; the
//! engine still reports a configuration error if it ever meets one that
//! does not.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GachaError, GachaResult};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Rarity tier of a catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rarity {
    /// Four-star, the common tier.
    Four,
    /// Five-star, the uncommon tier.
    Five,
    /// Six-star, the rare tier.
    Six,
}

impl Rarity {
    /// Number of stars for this tier.
    pub fn stars(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }

    /// All tiers from rarest to most common.
    pub fn all() -> &'static [Self] {
        &[Self::Six, Self::Five, Self::Four]
    }
}

impl TryFrom<u8> for Rarity {
    type Error = GachaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            other => Err(GachaError::InvalidRarity(other)),
        }
    }
}

impl From<Rarity> for u8 {
    fn from(rarity: Rarity) -> Self {
        rarity.stars()
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}★", self.stars())
    }
}

/// An immutable catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identifier, referenced by banners and the inventory.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Permanently limited: never part of the general rotation.
    #[serde(default)]
    pub limited: bool,
}

impl Entity {
    /// Create a new entity.
    pub fn new(id: impl Into<String>, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rarity,
            limited: false,
        }
    }

    /// Mark the entity as permanently limited.
    pub fn limited(mut self) -> Self {
        self.limited = true;
        self
    }
}

/// One promotional period with a featured entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Banner number as shown to players.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Identifier of the featured ("UP") entity.
    pub featured: String,
}

impl BannerConfig {
    /// Create a new banner.
    pub fn new(id: u32, name: impl Into<String>, featured: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            featured: featured.into(),
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    entities: Vec<Entity>,
    banners: Vec<BannerConfig>,
}

/// The validated static catalog: entities plus the ordered banner sequence.
#[derive(Debug, Clone)]
pub struct Catalog {
    entities: Vec<Entity>,
    banners: Vec<BannerConfig>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique, at least one banner
    /// exists and every banner's featured id resolves.
    pub fn new(entities: Vec<Entity>, banners: Vec<BannerConfig>) -> GachaResult<Self> {
        if banners.is_empty() {
            return Err(GachaError::NoBanners);
        }

        let mut seen = HashSet::new();
        for entity in &entities {
            if !seen.insert(entity.id.as_str()) {
                return Err(GachaError::DuplicateEntity(entity.id.clone()));
            }
        }

        for banner in &banners {
            if !seen.contains(banner.featured.as_str()) {
                return Err(GachaError::UnknownFeatured {
                    banner: banner.name.clone(),
                    featured: banner.featured.clone(),
                });
            }
        }

        Ok(Self { entities, banners })
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> GachaResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.entities, file.banners)
    }

    /// Read and parse a catalog JSON file.
    pub fn from_path(path: &Path) -> GachaResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> GachaResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// All entities in catalog order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Look up an entity by id.
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Entities of one rarity, in catalog order.
    pub fn by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.rarity == rarity)
    }

    /// The banner sequence.
    pub fn banners(&self) -> &[BannerConfig] {
        &self.banners
    }

    /// Number of banners (always at least one).
    pub fn banner_count(&self) -> usize {
        self.banners.len()
    }

    /// The banner at `index`.
    pub fn banner(&self, index: usize) -> GachaResult<&BannerConfig> {
        self.banners.get(index).ok_or(GachaError::BannerOutOfRange {
            index,
            count: self.banners.len(),
        })
    }
}
