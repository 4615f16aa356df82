//! In-memory produced-stock ledger.
//!
//! Owns the mapping from composite variant key to accumulated stock. Area
//! figures come from `tilestock-conversion`; this crate only folds them into
//! per-variant totals.

pub mod ledger;

pub use ledger::{ProductionLot, StockLedger, StockRecord};
