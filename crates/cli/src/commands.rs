//! One-shot commands: load the ledger, apply one operation, save if it changed.

use std::io::{self, Write};

use serde_json::Value as JsonValue;

use stockledger_core::{LedgerWarning, Outcome, StockChange};
use stockledger_infra::{LedgerPersistence, LedgerStore};
use stockledger_inventory::StockLedger;

/// Interpret a raw quantity argument as JSON (`"10"` is an integer, `"ten"`
/// stays a string) so the ledger's argument checks see its real type.
pub fn quantity_arg(raw: &str) -> JsonValue {
    serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}

/// Load the ledger; a decode/read failure is handed back so the caller does not
/// overwrite a document it could not read.
fn open<S: LedgerStore + ?Sized>(store: &S) -> Result<StockLedger, Outcome<()>> {
    let mut ledger = StockLedger::new();
    match ledger.load_from(store) {
        Outcome::Error(err) => Err(Outcome::Error(err)),
        Outcome::Ok(_) | Outcome::Warning(_) => Ok(ledger),
    }
}

fn apply<S, W>(
    store: &S,
    out: &mut W,
    op: impl FnOnce(&mut StockLedger) -> Outcome<StockChange>,
) -> io::Result<Outcome<()>>
where
    S: LedgerStore + ?Sized,
    W: Write,
{
    let mut ledger = match open(store) {
        Ok(ledger) => ledger,
        Err(outcome) => return Ok(outcome),
    };

    match op(&mut ledger) {
        Outcome::Ok(change) => {
            writeln!(out, "{} -> {}", change.item(), change.total())?;
            Ok(ledger.save_to(store).map(|_| ()))
        }
        other => Ok(other.map(|_| ())),
    }
}

pub fn add<S: LedgerStore + ?Sized, W: Write>(
    store: &S,
    item: &str,
    qty: &str,
    out: &mut W,
) -> io::Result<Outcome<()>> {
    let item = JsonValue::String(item.to_string());
    let qty = quantity_arg(qty);
    apply(store, out, |ledger| ledger.add_value(&item, &qty))
}

pub fn remove<S: LedgerStore + ?Sized, W: Write>(
    store: &S,
    item: &str,
    qty: &str,
    out: &mut W,
) -> io::Result<Outcome<()>> {
    let item = JsonValue::String(item.to_string());
    let qty = quantity_arg(qty);
    apply(store, out, |ledger| ledger.remove_value(&item, &qty))
}

pub fn get<S: LedgerStore + ?Sized, W: Write>(
    store: &S,
    item: &str,
    out: &mut W,
) -> io::Result<Outcome<()>> {
    let ledger = match open(store) {
        Ok(ledger) => ledger,
        Err(outcome) => return Ok(outcome),
    };
    writeln!(out, "{}", ledger.get_quantity(item))?;
    Ok(Outcome::Ok(()))
}

pub fn low<S: LedgerStore + ?Sized, W: Write>(
    store: &S,
    threshold: i64,
    out: &mut W,
) -> io::Result<Outcome<()>> {
    let ledger = match open(store) {
        Ok(ledger) => ledger,
        Err(outcome) => return Ok(outcome),
    };
    for item in ledger.check_low_items(threshold) {
        writeln!(out, "{item}")?;
    }
    Ok(Outcome::Ok(()))
}

pub fn report<S: LedgerStore + ?Sized, W: Write>(
    store: &S,
    out: &mut W,
) -> io::Result<Outcome<()>> {
    let ledger = match open(store) {
        Ok(ledger) => ledger,
        Err(outcome) => return Ok(outcome),
    };
    let report = ledger.report();
    write!(out, "{report}")?;

    if report.is_empty() {
        tracing::warn!("Inventory is empty.");
        return Ok(LedgerWarning::EmptyInventory.into());
    }
    Ok(Outcome::Ok(()))
}
