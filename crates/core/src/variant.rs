//! Strongly-typed fields of a tile variant, and the composite stock key.
//!
//! Sizes, qualities and plant codes are open sets: the catalog is defined by
//! the conversion tables, not by these types. Unknown combinations surface as
//! lookup failures at conversion time.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Tile face size, e.g. `"600x1200"` (millimetres, width x length).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileSize(String);

/// Quality class code, e.g. `"PRE"`, `"STD"`, `"COM"`, `"ECO"`, `"REJ"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(String);

/// Producing plant code, e.g. `"P1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantCode(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl ValueObject for $t {}
    };
}

impl_string_newtype!(TileSize);
impl_string_newtype!(Quality);
impl_string_newtype!(PlantCode);

impl Quality {
    /// Whether this quality falls in the eco/rejection class.
    ///
    /// Codes are compared exactly; casing is the caller's contract.
    pub fn is_eco_or_rejection(&self) -> bool {
        self.0 == "ECO" || self.0 == "REJ"
    }
}

/// Tile thickness in whole millimetres.
///
/// Rendered as `"9mm"` inside [`VariantKey`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thickness(u32);

impl Thickness {
    pub fn new(millimetres: u32) -> Self {
        Self(millimetres)
    }

    pub fn millimetres(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for Thickness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

impl ValueObject for Thickness {}

/// Composite key identifying one stock bucket:
/// `{size}_{thickness}mm_{quality}_{plant}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantKey(String);

impl VariantKey {
    /// Build the composite key for a produced lot.
    pub fn for_lot(
        size: &TileSize,
        thickness: Thickness,
        quality: &Quality,
        plant_code: &PlantCode,
    ) -> Self {
        Self(format!("{size}_{thickness}_{quality}_{plant_code}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for VariantKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for VariantKey {}
