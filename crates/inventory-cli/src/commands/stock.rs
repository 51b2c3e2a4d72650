//! `add`, `remove` and `qty`.

use inventory_core::operand::parse_quantity;
use inventory_core::LogEntry;

use crate::app::AppContext;
use crate::cli::{QtyArgs, StockArgs};
use crate::output::entry_json;
use crate::ui::format::units;
use crate::ui::{print, receipt};

pub fn handle_add(ctx: &AppContext, args: &StockArgs) -> anyhow::Result<()> {
    let quantity = parse_quantity(&args.quantity)?;
    let mut session = ctx.open_session()?;

    let entry = session.ledger.add_item(&args.item, quantity)?;
    let on_hand = on_hand(&session.ledger, &args.item);
    session.commit()?;

    tracing::info!(item = %args.item, quantity, on_hand, "add committed");
    report_mutation(ctx, "Added", &entry, on_hand)
}

pub fn handle_remove(ctx: &AppContext, args: &StockArgs) -> anyhow::Result<()> {
    let quantity = parse_quantity(&args.quantity)?;
    let mut session = ctx.open_session()?;

    let entry = session.ledger.remove_item(&args.item, quantity)?;
    let on_hand = on_hand(&session.ledger, &args.item);
    session.commit()?;

    tracing::info!(item = %args.item, quantity, on_hand, "remove committed");
    report_mutation(ctx, "Removed", &entry, on_hand)
}

pub fn handle_qty(ctx: &AppContext, args: &QtyArgs) -> anyhow::Result<()> {
    let session = ctx.open_session()?;
    let quantity = session.ledger.get_quantity(&args.item)?;

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        let value = serde_json::json!({ "item": args.item, "quantity": quantity });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(&ui_ctx, &format!("{}: {}", args.item, units(quantity)));
    } else {
        println!("{}", quantity);
    }
    Ok(())
}

/// Quantity left after a mutation; an item dropped by the zero-stock policy has none.
fn on_hand(ledger: &inventory_core::InventoryLedger, item: &str) -> u64 {
    ledger.stock().get(item).copied().unwrap_or(0)
}

fn report_mutation(
    ctx: &AppContext,
    title: &str,
    entry: &LogEntry,
    on_hand: u64,
) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        let mut value = entry_json(entry);
        value["on_hand"] = serde_json::json!(on_hand);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    if ctx.quiet() {
        return Ok(());
    }

    let quantity = entry.quantity.to_string();
    let on_hand = on_hand.to_string();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            title,
            &[
                ("Item", entry.item.as_str()),
                ("Quantity", quantity.as_str()),
                ("On hand", on_hand.as_str()),
            ],
        ),
    );
    Ok(())
}
