//! Ledger error and warning model.

use thiserror::Error;

/// Ledger-level error.
///
/// Errors never cross the ledger boundary as `Err`; they travel inside
/// [`Outcome::Error`](crate::Outcome::Error) after being logged. Reasons are
/// kept as strings so outcomes stay `Clone + PartialEq` for assertions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Arguments at the untyped boundary had the wrong JSON types.
    #[error("invalid types: item(string), qty(integer); got {item}, {qty}")]
    InvalidArgument { item: &'static str, qty: &'static str },

    /// The new quantity does not fit in a signed 64-bit count.
    #[error("quantity overflow for {item}")]
    Overflow { item: String },

    /// The persisted document could not be read.
    #[error("could not read {location}: {reason}")]
    Read { location: String, reason: String },

    /// The persisted document is not a JSON object of integer quantities.
    #[error("could not decode JSON from {location}: {reason}")]
    Decode { location: String, reason: String },

    /// The ledger could not be written out.
    #[error("could not save data to {location}: {reason}")]
    Write { location: String, reason: String },
}

impl LedgerError {
    pub fn invalid_argument(item: &'static str, qty: &'static str) -> Self {
        Self::InvalidArgument { item, qty }
    }

    pub fn overflow(item: impl Into<String>) -> Self {
        Self::Overflow { item: item.into() }
    }

    pub fn read(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Read {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decode {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Write {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}

/// Non-fatal conditions: the operation fell back to a defined no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerWarning {
    #[error("attempted to add item with no name")]
    EmptyItemName,

    #[error("attempted to remove {item}, but it's not in stock")]
    NotInStock { item: String },

    #[error("{location} not found; starting with empty inventory")]
    MissingSource { location: String },

    #[error("inventory is empty")]
    EmptyInventory,
}

impl LedgerWarning {
    pub fn not_in_stock(item: impl Into<String>) -> Self {
        Self::NotInStock { item: item.into() }
    }

    pub fn missing_source(location: impl Into<String>) -> Self {
        Self::MissingSource {
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_subject() {
        let err = LedgerError::write("inventory.json", "permission denied");
        assert_eq!(
            err.to_string(),
            "could not save data to inventory.json: permission denied"
        );

        let warn = LedgerWarning::not_in_stock("orange");
        assert_eq!(
            warn.to_string(),
            "attempted to remove orange, but it's not in stock"
        );
    }

    #[test]
    fn invalid_argument_reports_both_types() {
        let err = LedgerError::invalid_argument("integer", "string");
        assert_eq!(
            err.to_string(),
            "invalid types: item(string), qty(integer); got integer, string"
        );
    }
}
