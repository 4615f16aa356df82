//! Demonstration entry point: records a day of production across two plants
//! and prints the resulting stock report as JSON.

use anyhow::Context;
use chrono::Utc;

use tilestock_core::{PlantCode, Quality, Thickness, TileSize};
use tilestock_stock::{ProductionLot, StockLedger};

fn main() -> anyhow::Result<()> {
    tilestock_observability::init();

    let mut ledger = StockLedger::new();

    let lots = [
        ("600x600", 9, "STD", "P1", 120),
        ("600x600", 9, "STD", "P1", 80),
        ("600x1200", 9, "PRE", "P1", 64),
        ("600x1200", 9, "ECO", "P2", 40),
        ("600x1200", 9, "REJ", "P2", 12),
        ("800x1600", 12, "STD", "P2", 30),
        ("1200x1800", 15, "PRE", "P1", 18),
    ];

    for (size, thickness, quality, plant, boxes) in lots {
        let lot = ProductionLot {
            size: TileSize::new(size),
            thickness: Thickness::new(thickness),
            quality: Quality::new(quality),
            plant_code: PlantCode::new(plant),
            boxes,
            occurred_at: Utc::now(),
        };
        let record = ledger.add_production(&lot)?;
        tracing::info!(
            size,
            quality,
            plant,
            boxes = record.boxes,
            sqm = %record.sqm,
            "variant total updated"
        );
    }

    // An off-catalog size fails the conversion and leaves the ledger as-is.
    let bogus = ProductionLot {
        size: TileSize::new("450x450"),
        thickness: Thickness::new(9),
        quality: Quality::new("STD"),
        plant_code: PlantCode::new("P1"),
        boxes: 10,
        occurred_at: Utc::now(),
    };
    if let Err(err) = ledger.add_production(&bogus) {
        tracing::warn!(%err, "rejected off-catalog lot");
    }

    let report =
        serde_json::to_string_pretty(ledger.all_stock()).context("serializing stock report")?;
    println!("{report}");

    Ok(())
}
