//! Items report: a snapshot of every ledger entry for console output.

use core::fmt;

use crate::ledger::StockLedger;

/// Point-in-time listing of the ledger, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockReport {
    pub lines: Vec<(String, i64)>,
}

impl StockReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl StockLedger {
    pub fn report(&self) -> StockReport {
        StockReport {
            lines: self
                .entries()
                .map(|(item, qty)| (item.to_string(), qty))
                .collect(),
        }
    }
}

impl fmt::Display for StockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Items Report ---")?;
        if self.lines.is_empty() {
            writeln!(f, "Inventory is empty.")?;
        }
        for (item, qty) in &self.lines {
            writeln!(f, "{item} -> {qty}")?;
        }
        writeln!(f, "--------------------")
    }
}
