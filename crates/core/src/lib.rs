//! `tilestock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the typed fields that identify a tile variant, the composite
//! stock key, and the domain error model.

pub mod error;
pub mod value_object;
pub mod variant;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
pub use variant::{PlantCode, Quality, Thickness, TileSize, VariantKey};
