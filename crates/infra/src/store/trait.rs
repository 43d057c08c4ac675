use std::io;

use thiserror::Error;

use stockledger_core::{LedgerError, LedgerWarning, Outcome};
use stockledger_inventory::StockLedger;

/// Store errors.
///
/// These stay inside the infra layer: [`LedgerPersistence`](crate::LedgerPersistence)
/// turns each of them into the matching fallback and [`Outcome`].
///
/// - **NotFound**: nothing has been persisted at the location yet
/// - **Read**: the location exists but could not be read
/// - **Decode**: the content is not a JSON object of integer quantities
/// - **Write**: the ledger could not be written out
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{location} not found")]
    NotFound { location: String },

    #[error("could not read {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("could not decode {location}: {reason}")]
    Decode { location: String, reason: String },

    #[error("could not write {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Map the failure onto the ledger's warning/error taxonomy.
    pub fn into_outcome<T>(self) -> Outcome<T> {
        match self {
            StoreError::NotFound { location } => LedgerWarning::missing_source(location).into(),
            StoreError::Read { location, source } => LedgerError::read(location, source).into(),
            StoreError::Decode { location, reason } => LedgerError::decode(location, reason).into(),
            StoreError::Write { location, source } => LedgerError::write(location, source).into(),
        }
    }
}

/// Whole-ledger persistence boundary.
///
/// A store holds exactly one ledger document. `read` decodes it wholesale and
/// `write` replaces it wholesale; there are no partial updates.
pub trait LedgerStore {
    /// Human-readable location, used in log lines and outcomes.
    fn location(&self) -> String;

    /// Decode the persisted ledger.
    fn read(&self) -> Result<StockLedger, StoreError>;

    /// Overwrite the persisted ledger.
    fn write(&self, ledger: &StockLedger) -> Result<(), StoreError>;
}
