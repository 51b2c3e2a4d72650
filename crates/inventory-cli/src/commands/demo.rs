//! `demo`: a scripted walk through the ledger on a scratch inventory.
//!
//! Each step reports success or the error it raised; rejected steps are part
//! of the script. Nothing touches the configured stock or log files.

use inventory_core::{InventoryLedger, JsonFileStore, StockStore, DEFAULT_LOW_THRESHOLD};
use serde_json::json;

use crate::app::AppContext;
use crate::output::print_stock_report;
use crate::ui::{badge, header, print, Badge};

/// Outcome of one demo step.
struct Step {
    label: &'static str,
    outcome: Result<String, String>,
}

impl Step {
    fn new<T, E: std::fmt::Display>(
        label: &'static str,
        result: Result<T, E>,
        ok: impl FnOnce(T) -> String,
    ) -> Self {
        Self {
            label,
            outcome: result.map(ok).map_err(|e| e.to_string()),
        }
    }
}

fn run_script(ledger: &mut InventoryLedger) -> Vec<Step> {
    let mut steps = vec![
        Step::new("add 10 apple", ledger.add_item("apple", 10), |_| {
            "Added 10 apples".to_string()
        }),
        Step::new("add -2 banana", ledger.add_item("banana", -2), |_| {
            "Added -2 bananas".to_string()
        }),
        Step::new(
            "add \"ten\" of 123",
            ledger.add_item_value(&json!(123), &json!("ten")),
            |_| "Added invalid item".to_string(),
        ),
        Step::new("remove 3 apple", ledger.remove_item("apple", 3), |_| {
            "Removed 3 apples".to_string()
        }),
        Step::new("remove 1 orange", ledger.remove_item("orange", 1), |_| {
            "Removed 1 orange".to_string()
        }),
        Step::new("qty apple", ledger.get_quantity("apple"), |qty| {
            format!("Apple stock: {}", qty)
        }),
    ];

    let low = ledger.low_stock(DEFAULT_LOW_THRESHOLD);
    let low = if low.is_empty() {
        "None".to_string()
    } else {
        low.join(", ")
    };
    steps.push(Step {
        label: "low stock",
        outcome: Ok(format!("Low stock items: {}", low)),
    });

    let scratch = std::env::temp_dir().join(format!(
        "inventory-demo-{}-{}.json",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    let store = JsonFileStore::new(&scratch);
    steps.push(Step::new("save", store.save(ledger.stock()), |_| {
        "Saved inventory to file".to_string()
    }));
    steps.push(Step::new("load", store.load(), |stock| {
        format!(
            "Loaded inventory from file ({} items)",
            stock.map(|s| s.len()).unwrap_or(0)
        )
    }));
    let _ = std::fs::remove_file(&scratch);

    steps
}

pub fn handle_demo(ctx: &AppContext) -> anyhow::Result<()> {
    let mut ledger = InventoryLedger::new();
    let steps = run_script(&mut ledger);

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        let results: Vec<serde_json::Value> = steps
            .iter()
            .map(|step| match &step.outcome {
                Ok(message) => json!({ "step": step.label, "ok": true, "message": message }),
                Err(error) => json!({ "step": step.label, "ok": false, "error": error }),
            })
            .collect();
        let value = json!({
            "steps": results,
            "stock": ledger.stock(),
            "log": ledger.log().iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print(&ui_ctx, &header(&ui_ctx, "demo", None));
    for step in &steps {
        let line = match &step.outcome {
            Ok(message) => badge(&ui_ctx, Badge::Ok, message),
            Err(error) => badge(&ui_ctx, Badge::Err, &format!("{}: {}", step.label, error)),
        };
        print(&ui_ctx, &line);
    }
    print_stock_report(&ui_ctx, &ledger, DEFAULT_LOW_THRESHOLD);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_outcomes() {
        let mut ledger = InventoryLedger::new();
        let steps = run_script(&mut ledger);

        let ok: Vec<bool> = steps.iter().map(|s| s.outcome.is_ok()).collect();
        assert_eq!(ok, vec![true, false, false, true, false, true, true, true, true]);
        assert!(steps[1].outcome.as_ref().unwrap_err().starts_with("Value error"));
        assert!(steps[2].outcome.as_ref().unwrap_err().starts_with("Type error"));
        assert!(steps[4].outcome.as_ref().unwrap_err().starts_with("Key error"));
        assert_eq!(steps[5].outcome.as_ref().unwrap(), "Apple stock: 7");
        assert_eq!(steps[6].outcome.as_ref().unwrap(), "Low stock items: None");
    }

    #[test]
    fn test_script_logs_only_successful_mutations() {
        let mut ledger = InventoryLedger::new();
        run_script(&mut ledger);

        assert_eq!(ledger.log().len(), 2);
        assert_eq!(ledger.get_quantity("apple").unwrap(), 7);
        assert!(!ledger.contains("banana"));
    }
}
