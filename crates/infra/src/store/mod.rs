//! Ledger store boundary.
//!
//! A store persists one whole ledger document. The JSON file store is the
//! production backend; the in-memory store serves tests and dry runs.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use r#trait::{LedgerStore, StoreError};
