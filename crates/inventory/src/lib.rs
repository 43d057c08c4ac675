//! Stock ledger domain module.
//!
//! This crate contains the ledger's business rules, implemented as
//! deterministic in-memory logic (no file IO). Persistence lives in
//! `stockledger-infra`.

pub mod boundary;
pub mod ledger;
pub mod report;

pub use ledger::{DEFAULT_LOW_STOCK_THRESHOLD, StockLedger};
pub use report::StockReport;
pub use stockledger_core::{LedgerError, LedgerWarning, Outcome, StockChange};
