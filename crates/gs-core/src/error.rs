//! Error types for the pull-resolution engine.

use crate::catalog::Rarity;

/// Configuration errors raised while loading a catalog or resolving a draw.
///
/// These are fatal: a draw that hits one of them is never substituted with
/// some other outcome. Expected precondition failures (a bonus batch without
/// a ticket, for instance) are not errors; see [`crate::batch::Rejection`].
#[derive(Debug, thiserror::Error)]
pub enum GachaError {
    /// A banner names a featured entity that is not in the catalog.
    #[error("banner '{banner}' features unknown entity '{featured}'")]
    UnknownFeatured {
        /// Display name of the offending banner.
        banner: String,
        /// The featured id that failed to resolve.
        featured: String,
    },

    /// Two catalog entities share the same identifier.
    #[error("duplicate entity id: {0}")]
    DuplicateEntity(String),

    /// An outcome needed a rarity pool that has no entities.
    #[error("no {0} entities available in the pool")]
    EmptyPool(Rarity),

    /// The catalog has no banners to rotate through.
    #[error("catalog defines no banners")]
    NoBanners,

    /// The state points at a banner the catalog does not have.
    #[error("banner index {index} out of range ({count} banners)")]
    BannerOutOfRange {
        /// The index stored in the state.
        index: usize,
        /// How many banners the catalog defines.
        count: usize,
    },

    /// A rarity value other than 4, 5 or 6.
    #[error("invalid rarity: {0} (expected 4, 5 or 6)")]
    InvalidRarity(u8),

    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid catalog JSON.
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for engine operations.
pub type GachaResult<T> = Result<T, GachaError>;
