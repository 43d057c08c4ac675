//! Load/save for the stock ledger.
//!
//! Both operations fail soft: `load` always leaves the ledger in a usable
//! state (the decoded document or empty) and `save` never propagates a write
//! failure. What happened is logged and returned as an [`Outcome`] carrying
//! the number of entries loaded or saved.

use stockledger_core::Outcome;
use stockledger_inventory::StockLedger;

use crate::store::{LedgerStore, StoreError};

pub trait LedgerPersistence {
    /// Replace the ledger wholesale with the store's document.
    fn load_from<S: LedgerStore + ?Sized>(&mut self, store: &S) -> Outcome<usize>;

    /// Overwrite the store's document with the whole ledger.
    fn save_to<S: LedgerStore + ?Sized>(&self, store: &S) -> Outcome<usize>;
}

impl LedgerPersistence for StockLedger {
    fn load_from<S: LedgerStore + ?Sized>(&mut self, store: &S) -> Outcome<usize> {
        let path = store.location();
        match store.read() {
            Ok(loaded) => {
                self.replace(loaded);
                tracing::info!(path = %path, items = self.len(), "Successfully loaded data from {path}");
                Outcome::Ok(self.len())
            }
            Err(err) => {
                self.clear();
                match &err {
                    StoreError::NotFound { .. } => {
                        tracing::warn!(path = %path, "{path} not found. Starting with empty inventory.");
                    }
                    StoreError::Decode { .. } => {
                        tracing::error!(path = %path, error = %err, "Could not decode JSON from {path}. Check file.");
                    }
                    StoreError::Read { .. } | StoreError::Write { .. } => {
                        tracing::error!(path = %path, error = %err, "Could not read {path}. Starting with empty inventory.");
                    }
                }
                err.into_outcome()
            }
        }
    }

    fn save_to<S: LedgerStore + ?Sized>(&self, store: &S) -> Outcome<usize> {
        let path = store.location();
        match store.write(self) {
            Ok(()) => {
                tracing::info!(path = %path, items = self.len(), "Successfully saved data to {path}");
                Outcome::Ok(self.len())
            }
            Err(err) => {
                tracing::error!(path = %path, error = %err, "Could not save data to {path}: {err}");
                err.into_outcome()
            }
        }
    }
}
