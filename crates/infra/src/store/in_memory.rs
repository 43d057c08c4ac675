use std::cell::RefCell;
use std::io;

use stockledger_inventory::StockLedger;

use super::r#trait::{LedgerStore, StoreError};
use crate::codec::{self, DecodeError};

/// In-memory ledger store.
///
/// Holds the encoded document text so reads and writes go through the same
/// codec as the file store. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: RefCell<Option<String>>,
    read_only: bool,
}

impl InMemoryStore {
    /// An empty store (reads report not-found).
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with raw document text.
    pub fn with_document(text: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(text.into())),
            read_only: false,
        }
    }

    /// A store whose writes always fail with `PermissionDenied`.
    pub fn read_only(self) -> Self {
        Self {
            read_only: true,
            ..self
        }
    }

    /// Raw document text, if anything has been written.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl LedgerStore for InMemoryStore {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn read(&self) -> Result<StockLedger, StoreError> {
        let document = self.document.borrow();
        let Some(text) = document.as_deref() else {
            return Err(StoreError::NotFound {
                location: self.location(),
            });
        };

        codec::decode(text.as_bytes()).map_err(|e| match e {
            DecodeError::Io(source) => StoreError::Read {
                location: self.location(),
                source,
            },
            DecodeError::Invalid(reason) => StoreError::Decode {
                location: self.location(),
                reason,
            },
        })
    }

    fn write(&self, ledger: &StockLedger) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Write {
                location: self.location(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            });
        }

        let text = codec::encode_to_string(ledger).map_err(|e| StoreError::Write {
            location: self.location(),
            source: e.into(),
        })?;
        *self.document.borrow_mut() = Some(text);
        Ok(())
    }
}
