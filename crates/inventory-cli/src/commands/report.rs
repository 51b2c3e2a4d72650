//! `report` and `low`.

use crate::app::AppContext;
use crate::cli::LowArgs;
use crate::output::{low_stock_json, print_low_stock, print_stock_report, stock_json};

pub fn handle_report(ctx: &AppContext) -> anyhow::Result<()> {
    let session = ctx.open_session()?;
    let threshold = ctx.settings()?.low_threshold;

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        let value = stock_json(&session.ledger, threshold);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    print_stock_report(&ui_ctx, &session.ledger, threshold);
    Ok(())
}

pub fn handle_low(ctx: &AppContext, args: &LowArgs) -> anyhow::Result<()> {
    let session = ctx.open_session()?;
    let threshold = match args.threshold {
        Some(threshold) => threshold,
        None => ctx.settings()?.low_threshold,
    };

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        let value = low_stock_json(&session.ledger, threshold);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    print_low_stock(&ui_ctx, &session.ledger, threshold);
    Ok(())
}
