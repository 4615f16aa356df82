//! Static packing and area tables.
//!
//! The per-box areas are semantic constants carried over from plant packing
//! practice (assuming 4 tiles for the 1.44 SQM box, 2 tiles for the 2.56 SQM
//! box, and so on). They are the source of truth for conversions and are
//! never re-derived from [`PACKING_CONFIGS`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::convert::TileTypeKey;

/// Square metres to square feet.
pub const SQM_TO_SQFT_FACTOR: Decimal = dec!(10.764);

/// Sellable area shipped per box, keyed by tile type.
pub const BOX_SQM_MAP: &[(&str, Decimal)] = &[
    ("600x600", dec!(1.44)),
    ("600x1200_standard", dec!(1.44)),
    ("600x1200_eco_rej", dec!(2.16)),
    ("800x1600", dec!(2.56)),
    ("1200x1800", dec!(4.32)),
];

/// How a box of one tile type is packed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PackingConfig {
    pub tiles_per_box: u32,
    pub tile_area_sqm: Decimal,
}

/// Tiles per box and per-tile face area, keyed by tile type.
///
/// The eco/rejection 600x1200 box packs a third tile, which is what moves
/// that variant from 1.44 to 2.16 SQM per box.
pub const PACKING_CONFIGS: &[(&str, PackingConfig)] = &[
    (
        "600x600",
        PackingConfig {
            tiles_per_box: 4,
            tile_area_sqm: dec!(0.36),
        },
    ),
    (
        "600x1200_standard",
        PackingConfig {
            tiles_per_box: 2,
            tile_area_sqm: dec!(0.72),
        },
    ),
    (
        "600x1200_eco_rej",
        PackingConfig {
            tiles_per_box: 3,
            tile_area_sqm: dec!(0.72),
        },
    ),
    (
        "800x1600",
        PackingConfig {
            tiles_per_box: 2,
            tile_area_sqm: dec!(1.28),
        },
    ),
    (
        "1200x1800",
        PackingConfig {
            tiles_per_box: 2,
            tile_area_sqm: dec!(2.16),
        },
    ),
];

/// Area shipped per box for a tile type, if the type is in the catalog.
pub fn area_per_box(key: &TileTypeKey) -> Option<Decimal> {
    BOX_SQM_MAP
        .iter()
        .find(|(k, _)| *k == key.table_key())
        .map(|(_, sqm)| *sqm)
}

/// Packing configuration for a tile type, if the type is in the catalog.
pub fn packing_config(key: &TileTypeKey) -> Option<PackingConfig> {
    PACKING_CONFIGS
        .iter()
        .find(|(k, _)| *k == key.table_key())
        .map(|(_, cfg)| *cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilestock_core::TileSize;

    #[test]
    fn packing_agrees_with_per_box_area() {
        for (key_str, per_box) in BOX_SQM_MAP {
            let key = match *key_str {
                "600x1200_standard" => TileTypeKey::Standard600x1200,
                "600x1200_eco_rej" => TileTypeKey::EcoRejection600x1200,
                size => TileTypeKey::Size(TileSize::new(size)),
            };
            let cfg = packing_config(&key).expect("every priced tile type has a packing config");
            assert_eq!(
                Decimal::from(cfg.tiles_per_box) * cfg.tile_area_sqm,
                *per_box,
                "packing mismatch for {key_str}"
            );
        }
    }

    #[test]
    fn unknown_type_has_no_entry() {
        let key = TileTypeKey::Size(TileSize::new("999x999"));
        assert_eq!(area_per_box(&key), None);
        assert_eq!(packing_config(&key), None);
    }
}
