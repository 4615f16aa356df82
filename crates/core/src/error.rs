//! Domain error model.

use thiserror::Error;

use crate::variant::{Quality, TileSize};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The conversion tables are the only thing that can fail in this domain:
/// a (size, quality) pair that resolves to no area-per-box entry. Everything
/// else is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No area-per-box entry exists for the size/quality combination.
    #[error("unresolved tile variant: size {size}, quality {quality}")]
    UnresolvedVariant { size: TileSize, quality: Quality },
}

impl DomainError {
    pub fn unresolved_variant(size: TileSize, quality: Quality) -> Self {
        Self::UnresolvedVariant { size, quality }
    }
}
