//! Untyped argument boundary.
//!
//! Callers holding loosely-typed input (command lines, scripted calls, JSON
//! payloads) go through here. Arguments are checked before they reach the
//! typed ledger API; a type mismatch is logged and reported as
//! [`LedgerError::InvalidArgument`] without touching the ledger.

use serde_json::Value as JsonValue;

use stockledger_core::{LedgerError, Outcome, StockChange};

use crate::ledger::StockLedger;

/// JSON type name used in validation messages.
pub fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_i64() => "integer",
        JsonValue::Number(n) if n.is_u64() => "integer out of range",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Check that `item` is a string and `qty` a signed 64-bit integer.
pub fn validate<'a>(item: &'a JsonValue, qty: &JsonValue) -> Result<(&'a str, i64), LedgerError> {
    match (item.as_str(), qty.as_i64()) {
        (Some(item), Some(qty)) => Ok((item, qty)),
        _ => Err(LedgerError::invalid_argument(type_name(item), type_name(qty))),
    }
}

impl StockLedger {
    /// [`add`](StockLedger::add) for untyped arguments.
    pub fn add_value(&mut self, item: &JsonValue, qty: &JsonValue) -> Outcome<StockChange> {
        match validate(item, qty) {
            Ok((item, qty)) => self.add(item, qty),
            Err(err) => reject(err),
        }
    }

    /// [`remove`](StockLedger::remove) for untyped arguments.
    pub fn remove_value(&mut self, item: &JsonValue, qty: &JsonValue) -> Outcome<StockChange> {
        match validate(item, qty) {
            Ok((item, qty)) => self.remove(item, qty),
            Err(err) => reject(err),
        }
    }
}

fn reject(err: LedgerError) -> Outcome<StockChange> {
    tracing::error!("{}", err);
    Outcome::Error(err)
}
