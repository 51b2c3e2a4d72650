//! Text and table output for stock and activity.

use inventory_core::InventoryLedger;

use crate::ui::format::{truncate, units};
use crate::ui::{badge, header, hint, print, table, Badge, Column, UiContext};

const MAX_ITEM_WIDTH: usize = 48;

/// Print every item and its quantity.
pub fn print_stock_report(ctx: &UiContext, ledger: &InventoryLedger, threshold: u64) {
    print(ctx, &header(ctx, "report", None));

    if ledger.is_empty() {
        print(ctx, "Inventory is empty");
        if ctx.mode.is_pretty() {
            print(ctx, &hint(ctx, "inventory add <item> <qty>"));
        }
        return;
    }

    let columns = [Column::new("Item"), Column::numeric("Quantity")];
    let rows: Vec<Vec<String>> = ledger
        .stock()
        .iter()
        .map(|(item, quantity)| {
            let mut qty = quantity.to_string();
            if ctx.mode.is_pretty() && *quantity < threshold {
                qty = format!("{} (low)", qty);
            }
            vec![truncate(item, MAX_ITEM_WIDTH), qty]
        })
        .collect();
    print(ctx, &table(ctx, &columns, &rows));

    if ctx.mode.is_pretty() {
        print(
            ctx,
            &format!("{} items, {}", ledger.len(), units(ledger.total_units())),
        );
    }
}

/// Print items below `threshold`.
pub fn print_low_stock(ctx: &UiContext, ledger: &InventoryLedger, threshold: u64) {
    let context = format!("below {}", threshold);
    print(ctx, &header(ctx, "low", Some(&context)));

    let low = ledger.low_stock(threshold);
    if low.is_empty() {
        if ctx.mode.is_pretty() {
            print(ctx, &badge(ctx, Badge::Ok, "No low-stock items"));
        }
        return;
    }
    if ctx.mode.is_pretty() {
        let count = match low.len() {
            1 => "1 item needs restocking".to_string(),
            n => format!("{} items need restocking", n),
        };
        print(ctx, &badge(ctx, Badge::Warn, &count));
    }

    let columns = [Column::new("Item"), Column::numeric("Quantity")];
    let rows: Vec<Vec<String>> = low
        .iter()
        .map(|item| {
            let quantity = ledger.stock().get(*item).copied().unwrap_or(0);
            vec![truncate(item, MAX_ITEM_WIDTH), quantity.to_string()]
        })
        .collect();
    print(ctx, &table(ctx, &columns, &rows));
}

/// Print activity log lines as stored.
pub fn print_history(ctx: &UiContext, lines: &[String]) {
    print(ctx, &header(ctx, "history", None));
    if lines.is_empty() {
        if ctx.mode.is_pretty() {
            print(ctx, &badge(ctx, Badge::Info, "No activity recorded"));
        }
        return;
    }
    for line in lines {
        print(ctx, line);
    }
}
