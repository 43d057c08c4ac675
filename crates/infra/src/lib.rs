//! Infrastructure layer: ledger persistence and store configuration.

pub mod codec;
pub mod config;
pub mod persistence;
pub mod store;

pub use config::{DEFAULT_STORE_PATH, STORE_PATH_ENV, StoreConfig};
pub use persistence::LedgerPersistence;
pub use store::{InMemoryStore, JsonFileStore, LedgerStore, StoreError};
