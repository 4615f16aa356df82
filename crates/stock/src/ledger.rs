use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tilestock_conversion::{boxes_to_sqm, sqm_to_sqft};
use tilestock_core::{DomainResult, PlantCode, Quality, Thickness, TileSize, VariantKey};

/// One produced batch of boxes, as reported by a plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionLot {
    pub size: TileSize,
    pub thickness: Thickness,
    pub quality: Quality,
    pub plant_code: PlantCode,
    pub boxes: u64,
    pub occurred_at: DateTime<Utc>,
}

impl ProductionLot {
    /// The stock bucket this lot lands in.
    pub fn variant_key(&self) -> VariantKey {
        VariantKey::for_lot(&self.size, self.thickness, &self.quality, &self.plant_code)
    }
}

/// Accumulated stock for one variant.
///
/// Monotonic in this scope: additions only, never decremented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub boxes: u64,
    pub sqm: Decimal,
    pub sqft: Decimal,
    /// Timestamp of the latest lot folded into this record.
    pub last_produced_at: DateTime<Utc>,
}

/// In-memory stock accumulator, keyed by composite variant key.
///
/// Explicitly constructed; the composing application owns the lifecycle.
/// Mutation takes `&mut self`, so a caller that wants to share a ledger
/// across threads must bring its own lock.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLedger {
    records: HashMap<VariantKey, StockRecord>,
}

impl StockLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a produced lot into its variant's running totals.
    ///
    /// The conversion runs first; an unresolvable size/quality pair
    /// propagates as an error before anything is written, so a failed call
    /// leaves the ledger exactly as it was. Returns the updated record.
    pub fn add_production(&mut self, lot: &ProductionLot) -> DomainResult<StockRecord> {
        let sqm = boxes_to_sqm(&lot.size, &lot.quality, lot.boxes)?;
        let sqft = sqm_to_sqft(sqm);
        let key = lot.variant_key();

        let record = self
            .records
            .entry(key.clone())
            .or_insert_with(|| StockRecord {
                boxes: 0,
                sqm: Decimal::ZERO,
                sqft: Decimal::ZERO,
                last_produced_at: lot.occurred_at,
            });
        record.boxes += lot.boxes;
        record.sqm += sqm;
        record.sqft += sqft;
        record.last_produced_at = lot.occurred_at;
        let updated = record.clone();

        tracing::debug!(
            variant = %key,
            boxes = lot.boxes,
            sqm = %updated.sqm,
            sqft = %updated.sqft,
            "recorded production lot"
        );

        Ok(updated)
    }

    /// Read-only view of the full mapping.
    pub fn all_stock(&self) -> &HashMap<VariantKey, StockRecord> {
        &self.records
    }

    /// Running totals for one variant, if anything has been produced.
    pub fn record(&self, key: &VariantKey) -> Option<&StockRecord> {
        self.records.get(key)
    }

    /// Clear the mapping to empty. Test isolation, not a production
    /// operation.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn lot(size: &str, thickness: u32, quality: &str, plant: &str, boxes: u64) -> ProductionLot {
        ProductionLot {
            size: TileSize::new(size),
            thickness: Thickness::new(thickness),
            quality: Quality::new(quality),
            plant_code: PlantCode::new(plant),
            boxes,
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn first_lot_initializes_then_accumulates() {
        let mut ledger = StockLedger::new();
        let record = ledger
            .add_production(&lot("600x600", 9, "STD", "P1", 10))
            .unwrap();

        assert_eq!(record.boxes, 10);
        assert_eq!(record.sqm, dec!(14.4));
        assert_eq!(record.sqft, dec!(155.00));
    }

    #[test]
    fn identical_keys_accumulate_rather_than_overwrite() {
        let mut ledger = StockLedger::new();
        ledger
            .add_production(&lot("600x600", 9, "STD", "P1", 10))
            .unwrap();
        let record = ledger
            .add_production(&lot("600x600", 9, "STD", "P1", 10))
            .unwrap();

        assert_eq!(record.boxes, 20);
        assert_eq!(record.sqm, dec!(28.8));
        assert_eq!(record.sqft, dec!(310.00));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn thickness_and_plant_split_buckets() {
        let mut ledger = StockLedger::new();
        ledger
            .add_production(&lot("600x1200", 9, "ECO", "P1", 5))
            .unwrap();
        ledger
            .add_production(&lot("600x1200", 12, "ECO", "P1", 5))
            .unwrap();
        ledger
            .add_production(&lot("600x1200", 9, "ECO", "P2", 5))
            .unwrap();

        assert_eq!(ledger.len(), 3);
        let thin_p1 = VariantKey::for_lot(
            &TileSize::new("600x1200"),
            Thickness::new(9),
            &Quality::new("ECO"),
            &PlantCode::new("P1"),
        );
        assert_eq!(ledger.record(&thin_p1).unwrap().boxes, 5);
    }

    #[test]
    fn failed_conversion_leaves_ledger_untouched() {
        let mut ledger = StockLedger::new();
        ledger
            .add_production(&lot("800x1600", 12, "STD", "P1", 4))
            .unwrap();
        let before = ledger.clone();

        ledger
            .add_production(&lot("999x999", 9, "STD", "P1", 3))
            .unwrap_err();

        assert_eq!(ledger, before);
    }

    #[test]
    fn reset_yields_an_empty_mapping() {
        let mut ledger = StockLedger::new();
        ledger
            .add_production(&lot("1200x1800", 15, "PRE", "P1", 2))
            .unwrap();
        assert!(!ledger.is_empty());

        ledger.reset();

        assert!(ledger.is_empty());
        assert!(ledger.all_stock().is_empty());
    }

    #[test]
    fn last_produced_at_follows_the_latest_lot() {
        let mut ledger = StockLedger::new();
        let mut first = lot("600x600", 9, "STD", "P1", 1);
        first.occurred_at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let mut second = lot("600x600", 9, "STD", "P1", 1);
        second.occurred_at = Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap();

        ledger.add_production(&first).unwrap();
        let record = ledger.add_production(&second).unwrap();

        assert_eq!(record.last_produced_at, second.occurred_at);
    }

    #[test]
    fn returned_record_matches_stored_state() {
        let mut ledger = StockLedger::new();
        let produced = lot("600x1200", 9, "REJ", "P2", 8);
        let returned = ledger.add_production(&produced).unwrap();

        assert_eq!(ledger.record(&produced.variant_key()), Some(&returned));
    }
}
