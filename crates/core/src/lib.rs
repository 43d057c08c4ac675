//! `stockledger-core` — shared vocabulary for the stock ledger.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup):
//! the error/warning taxonomy and the tagged [`Outcome`] every ledger
//! operation hands back to its caller.

pub mod change;
pub mod error;
pub mod outcome;

pub use change::StockChange;
pub use error::{LedgerError, LedgerWarning};
pub use outcome::Outcome;
