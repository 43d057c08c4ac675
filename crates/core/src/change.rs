//! Stock changes reported by successful ledger mutations.

/// What a successful `add`/`remove` did to one ledger entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockChange {
    /// `qty` was added; the entry now holds `total` (which may be <= 0).
    Added { item: String, qty: i64, total: i64 },
    /// `qty` was removed; the entry now holds `total` (always > 0).
    Removed { item: String, qty: i64, total: i64 },
    /// The entry dropped to zero or below and was deleted.
    Depleted { item: String },
}

impl StockChange {
    pub fn item(&self) -> &str {
        match self {
            StockChange::Added { item, .. }
            | StockChange::Removed { item, .. }
            | StockChange::Depleted { item } => item,
        }
    }

    /// Quantity held after the change (`0` once depleted).
    pub fn total(&self) -> i64 {
        match self {
            StockChange::Added { total, .. } | StockChange::Removed { total, .. } => *total,
            StockChange::Depleted { .. } => 0,
        }
    }
}
