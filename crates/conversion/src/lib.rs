//! Tile packing and area conversions.
//!
//! This crate contains the conversion rules for turning box counts into area
//! measurements, implemented purely as deterministic domain logic (no IO, no
//! state). The tables in [`tables`] are the configuration heart of the
//! system; everything else is lookup and arithmetic.

pub mod convert;
pub mod tables;

pub use convert::{TileTypeKey, boxes_to_sqm, sqm_to_sqft, tile_type_key};
pub use tables::{PackingConfig, SQM_TO_SQFT_FACTOR, area_per_box, packing_config};
