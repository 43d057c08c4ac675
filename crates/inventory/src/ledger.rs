use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use stockledger_core::{LedgerError, LedgerWarning, Outcome, StockChange};

/// Items strictly below this quantity are reported as low stock by default.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// The stock ledger: item name -> signed quantity.
///
/// Entries iterate in insertion order. `add` keeps entries whatever their
/// quantity; `remove` deletes an entry once it reaches zero or below.
#[derive(Debug, Clone, Default)]
pub struct StockLedger {
    quantities: IndexMap<String, i64>,
}

impl StockLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from `(item, qty)` pairs, trusting them as given.
    ///
    /// A repeated item keeps its first position and its last quantity.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Self {
            quantities: entries
                .into_iter()
                .map(|(item, qty)| (item.into(), qty))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.quantities.contains_key(item)
    }

    /// Iterate `(item, qty)` in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.quantities
            .iter()
            .map(|(item, qty)| (item.as_str(), *qty))
    }

    /// Current quantity of `item`, or `0` when absent.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.quantities.get(item).copied().unwrap_or(0)
    }

    /// Add `qty` (possibly negative) to `item`.
    ///
    /// The resulting quantity is stored unconditionally, even when it is zero
    /// or negative.
    pub fn add(&mut self, item: &str, qty: i64) -> Outcome<StockChange> {
        if item.is_empty() {
            tracing::warn!(qty, "Attempted to add item with no name.");
            return LedgerWarning::EmptyItemName.into();
        }

        let Some(total) = self.get_quantity(item).checked_add(qty) else {
            tracing::error!(item, qty, "Could not add {qty} of {item}: quantity overflow");
            return LedgerError::overflow(item).into();
        };

        self.quantities.insert(item.to_string(), total);
        tracing::info!(item, qty, total, "Added {qty} of {item}. New total: {total}");

        Outcome::Ok(StockChange::Added {
            item: item.to_string(),
            qty,
            total,
        })
    }

    /// Remove `qty` of `item`, deleting the entry once it reaches zero or below.
    ///
    /// Removing an absent item is a warning and leaves the ledger untouched.
    pub fn remove(&mut self, item: &str, qty: i64) -> Outcome<StockChange> {
        let Some(current) = self.quantities.get_mut(item) else {
            tracing::warn!(item, qty, "Attempted to remove {item}, but it's not in stock.");
            return LedgerWarning::not_in_stock(item).into();
        };

        let total = current.saturating_sub(qty);
        if total <= 0 {
            self.quantities.shift_remove(item);
            tracing::info!(item, qty, total = 0, "Removed all remaining {item} from stock.");
            return Outcome::Ok(StockChange::Depleted {
                item: item.to_string(),
            });
        }

        *current = total;
        tracing::info!(item, qty, total, "Removed {qty} of {item}. New total: {total}");

        Outcome::Ok(StockChange::Removed {
            item: item.to_string(),
            qty,
            total,
        })
    }

    /// Items whose quantity is strictly below `threshold`, in insertion order.
    pub fn check_low_items(&self, threshold: i64) -> Vec<&str> {
        self.entries()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(item, _)| item)
            .collect()
    }

    /// [`check_low_items`](Self::check_low_items) with the default threshold.
    pub fn low_items(&self) -> Vec<&str> {
        self.check_low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Replace the whole ledger (used by load).
    pub fn replace(&mut self, other: StockLedger) {
        *self = other;
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}

/// Ledgers are equal when they hold the same entries in the same order.
impl PartialEq for StockLedger {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries().eq(other.entries())
    }
}

impl Eq for StockLedger {}

/// Serializes as a JSON object in insertion order.
impl Serialize for StockLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (item, qty) in self.entries() {
            map.serialize_entry(item, &qty)?;
        }
        map.end()
    }
}
