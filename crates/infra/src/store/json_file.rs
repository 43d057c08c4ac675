use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use stockledger_inventory::StockLedger;

use super::r#trait::{LedgerStore, StoreError};
use crate::codec::{self, DecodeError};

/// Ledger persisted as a single JSON file.
///
/// The file handle is opened per call and dropped on every exit path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<StockLedger, StoreError> {
        let file = File::open(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound {
                    location: self.location(),
                }
            } else {
                StoreError::Read {
                    location: self.location(),
                    source,
                }
            }
        })?;

        codec::decode(BufReader::new(file)).map_err(|e| match e {
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
        let write_err = |source: io::Error| StoreError::Write {
            location: self.location(),
            source,
        };

        let file = File::create(&self.path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        codec::encode(ledger, &mut writer).map_err(|e| write_err(e.into()))?;
        writer.flush().map_err(write_err)
    }
}
