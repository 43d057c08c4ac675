use std::fs;

use stockledger_core::{LedgerError, LedgerWarning, Outcome};
use stockledger_infra::{JsonFileStore, LedgerPersistence, StoreConfig};
use stockledger_inventory::StockLedger;

fn scripted_ledger() -> StockLedger {
    let mut stock = StockLedger::new();
    stock.add("apple", 10).ok();
    stock.add("banana", 15).ok();
    stock.add("banana", -2).ok();
    stock.remove("apple", 3).ok();
    stock.remove("orange", 1).ok();
    stock
}

#[test]
fn save_then_load_reproduces_the_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let store = StoreConfig::default()
        .with_path(dir.path().join("inventory.json"))
        .open();

    let stock = scripted_ledger();
    assert_eq!(stock.save_to(&store), Outcome::Ok(2));

    let mut restored = StockLedger::new();
    assert_eq!(restored.load_from(&store), Outcome::Ok(2));
    assert_eq!(restored, stock);
    assert_eq!(restored.get_quantity("apple"), 7);
    assert_eq!(restored.get_quantity("banana"), 13);
}

#[test]
fn saved_file_is_an_indented_json_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    scripted_ledger().save_to(&JsonFileStore::new(&path)).ok();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "{\n    \"apple\": 7,\n    \"banana\": 13\n}");
}

#[test]
fn load_accepts_any_valid_object_of_integers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, r#"{"apple":7,"banana":13,"pear":-2}"#).unwrap();

    let mut stock = StockLedger::new();
    assert!(stock.load_from(&JsonFileStore::new(&path)).is_ok());

    assert_eq!(stock.check_low_items(5), vec!["pear"]);
}

#[test]
fn load_of_nonexistent_path_yields_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("missing.json"));
    let mut stock = scripted_ledger();

    let out = stock.load_from(&store);

    assert!(matches!(
        out.warning(),
        Some(LedgerWarning::MissingSource { .. })
    ));
    assert!(stock.is_empty());
}

#[test]
fn load_of_invalid_json_yields_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, "{ this is not json").unwrap();
    let mut stock = scripted_ledger();

    let out = stock.load_from(&JsonFileStore::new(&path));

    assert!(matches!(out.error(), Some(LedgerError::Decode { .. })));
    assert!(stock.is_empty());
}

#[test]
fn save_into_missing_directory_is_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("no-such-dir").join("inventory.json"));

    let out = scripted_ledger().save_to(&store);

    assert!(matches!(out.error(), Some(LedgerError::Write { .. })));
}
