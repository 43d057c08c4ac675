//! Scripted walkthrough of every ledger operation against a store.

use std::io::{self, Write};

use serde_json::json;

use stockledger_infra::{LedgerPersistence, LedgerStore};
use stockledger_inventory::StockLedger;

/// Run the demo sequence and return the ledger as saved.
///
/// Outcomes are only logged here; the demo keeps going whatever happens,
/// including the deliberately ill-typed `add`.
pub fn run<S, W>(store: &S, out: &mut W) -> io::Result<StockLedger>
where
    S: LedgerStore + ?Sized,
    W: Write,
{
    // Every outcome below has already been logged by the ledger or the
    // persistence layer; the walkthrough carries on regardless.
    let mut stock = StockLedger::new();
    let _ = stock.load_from(store);

    let _ = stock.add("apple", 10);
    let _ = stock.add("banana", 15);
    let _ = stock.add_value(&json!(123), &json!("ten"));
    let _ = stock.add("banana", -2);

    let _ = stock.remove("apple", 3);
    let _ = stock.remove("orange", 1);

    writeln!(out, "Apple stock: {}", stock.get_quantity("apple"))?;
    writeln!(out, "Low items: {:?}", stock.low_items())?;

    let _ = stock.save_to(store);
    write!(out, "\n{}", stock.report())?;

    Ok(stock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockledger_infra::{InMemoryStore, JsonFileStore};

    #[test]
    fn first_run_starts_empty_and_saves() {
        let store = InMemoryStore::new();
        let mut out = Vec::new();

        let stock = run(&store, &mut out).unwrap();

        assert_eq!(stock.get_quantity("apple"), 7);
        assert_eq!(stock.get_quantity("banana"), 13);
        assert!(!stock.contains("orange"));
        assert_eq!(
            store.document().as_deref(),
            Some("{\n    \"apple\": 7,\n    \"banana\": 13\n}")
        );

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Apple stock: 7\n\
             Low items: []\n\
             \n\
             --- Items Report ---\n\
             apple -> 7\n\
             banana -> 13\n\
             --------------------\n"
        );
    }

    #[test]
    fn second_run_builds_on_the_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        run(&store, &mut io::sink()).unwrap();
        let stock = run(&store, &mut io::sink()).unwrap();

        assert_eq!(stock.get_quantity("apple"), 14);
        assert_eq!(stock.get_quantity("banana"), 26);
    }

    #[test]
    fn low_items_line_lists_loaded_low_stock() {
        let store = InMemoryStore::with_document(r#"{"pear": -2}"#);
        let mut out = Vec::new();

        run(&store, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Low items: [\"pear\"]\n"));
    }
}
