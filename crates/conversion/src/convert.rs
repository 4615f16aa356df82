//! Box count to area conversions.

use rust_decimal::Decimal;

use tilestock_core::{DomainError, DomainResult, Quality, TileSize};

use crate::tables;

/// Areas are reported to two decimal places throughout.
const AREA_SCALE: u32 = 2;

/// The one size packed two different ways depending on quality class.
const DUAL_PACK_SIZE: &str = "600x1200";

/// Key into the conversion tables, resolved from (size, quality).
///
/// Every size keys the tables directly except 600x1200, which splits by
/// quality class: premium/standard/commercial boxes pack two tiles,
/// eco/rejection boxes pack three.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TileTypeKey {
    /// 600x1200 premium/standard/commercial pack.
    Standard600x1200,
    /// 600x1200 eco/rejection pack.
    EcoRejection600x1200,
    /// Any other size.
    Size(TileSize),
}

impl TileTypeKey {
    /// String form of the key, as the tables spell it.
    pub fn table_key(&self) -> &str {
        match self {
            TileTypeKey::Standard600x1200 => "600x1200_standard",
            TileTypeKey::EcoRejection600x1200 => "600x1200_eco_rej",
            TileTypeKey::Size(size) => size.as_str(),
        }
    }
}

impl core::fmt::Display for TileTypeKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.table_key())
    }
}

/// Resolve the conversion-table key for a size/quality pair.
///
/// Total: unknown sizes resolve to themselves and fail later, at lookup.
pub fn tile_type_key(size: &TileSize, quality: &Quality) -> TileTypeKey {
    if size.as_str() == DUAL_PACK_SIZE {
        if quality.is_eco_or_rejection() {
            TileTypeKey::EcoRejection600x1200
        } else {
            TileTypeKey::Standard600x1200
        }
    } else {
        TileTypeKey::Size(size.clone())
    }
}

/// Convert a box count to square metres, rounded to two decimal places.
pub fn boxes_to_sqm(size: &TileSize, quality: &Quality, boxes: u64) -> DomainResult<Decimal> {
    let key = tile_type_key(size, quality);
    let per_box = tables::area_per_box(&key)
        .ok_or_else(|| DomainError::unresolved_variant(size.clone(), quality.clone()))?;
    Ok((per_box * Decimal::from(boxes)).round_dp(AREA_SCALE))
}

/// Convert square metres to square feet, rounded to two decimal places.
pub fn sqm_to_sqft(sqm: Decimal) -> Decimal {
    (sqm * tables::SQM_TO_SQFT_FACTOR).round_dp(AREA_SCALE)
}
