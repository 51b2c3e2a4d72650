//! JSON output formatting for stock and activity.

use inventory_core::{InventoryLedger, LogEntry};

/// Convert a log entry to JSON for output.
pub fn entry_json(entry: &LogEntry) -> serde_json::Value {
    serde_json::json!({
        "timestamp": entry.timestamp,
        "action": entry.action,
        "item": entry.item,
        "quantity": entry.quantity,
        "line": entry.to_string(),
    })
}

/// Convert the full stock to JSON, flagging items below `threshold`.
pub fn stock_json(ledger: &InventoryLedger, threshold: u64) -> serde_json::Value {
    let items: Vec<serde_json::Value> = ledger
        .stock()
        .iter()
        .map(|(item, quantity)| {
            serde_json::json!({
                "item": item,
                "quantity": quantity,
                "low": *quantity < threshold,
            })
        })
        .collect();
    serde_json::json!({
        "items": items,
        "item_count": ledger.len(),
        "total_units": ledger.total_units(),
        "zero_policy": ledger.policy(),
    })
}

/// Convert the low-stock query result to JSON.
pub fn low_stock_json(ledger: &InventoryLedger, threshold: u64) -> serde_json::Value {
    let items: Vec<serde_json::Value> = ledger
        .low_stock(threshold)
        .into_iter()
        .map(|item| {
            serde_json::json!({
                "item": item,
                "quantity": ledger.stock().get(item).copied().unwrap_or(0),
            })
        })
        .collect();
    serde_json::json!({
        "threshold": threshold,
        "items": items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::ZeroStockPolicy;

    fn sample() -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        ledger.add_item("apple", 10).unwrap();
        ledger.add_item("banana", 2).unwrap();
        ledger
    }

    #[test]
    fn test_stock_json_flags_low_items() {
        let value = stock_json(&sample(), 5);
        assert_eq!(value["total_units"], 12);
        assert_eq!(value["items"][0]["item"], "apple");
        assert_eq!(value["items"][0]["low"], false);
        assert_eq!(value["items"][1]["low"], true);
        assert_eq!(value["zero_policy"], "retain");
    }

    #[test]
    fn test_stock_json_reports_delete_policy() {
        let ledger = InventoryLedger::new().with_policy(ZeroStockPolicy::Delete);
        assert_eq!(stock_json(&ledger, 5)["zero_policy"], "delete");
    }

    #[test]
    fn test_low_stock_json() {
        let value = low_stock_json(&sample(), 5);
        assert_eq!(value["threshold"], 5);
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
        assert_eq!(value["items"][0]["quantity"], 2);
    }

    #[test]
    fn test_entry_json_has_line() {
        let ledger = sample();
        let value = entry_json(&ledger.log()[0]);
        assert_eq!(value["action"], "added");
        assert!(value["line"].as_str().unwrap().ends_with("Added 10 of apple"));
    }
}
