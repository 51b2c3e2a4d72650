//! `apply`: run a batch of operations from a JSON file.
//!
//! The batch is all-or-nothing: operations run against the in-memory ledger
//! and nothing is saved unless every one succeeds.

use std::io::Read;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use crate::app::AppContext;
use crate::cli::ApplyArgs;
use crate::output::entry_json;
use crate::ui::{print, receipt};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum OpKind {
    Add,
    Remove,
}

/// One batch operation. Operands stay untyped until the ledger validates them.
#[derive(Debug, Deserialize)]
struct Operation {
    op: OpKind,
    #[serde(default)]
    item: Value,
    #[serde(default)]
    qty: Value,
}

fn read_batch(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read operations from stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))
}

fn parse_batch(contents: &str) -> anyhow::Result<Vec<Operation>> {
    serde_json::from_str(contents).context(
        "Operations must be a JSON array of {\"op\": \"add\"|\"remove\", \"item\", \"qty\"}",
    )
}

pub fn handle_apply(ctx: &AppContext, args: &ApplyArgs) -> anyhow::Result<()> {
    let operations = parse_batch(&read_batch(&args.file)?)?;
    let mut session = ctx.open_session()?;

    for (index, operation) in operations.iter().enumerate() {
        let result = match operation.op {
            OpKind::Add => session.ledger.add_item_value(&operation.item, &operation.qty),
            OpKind::Remove => session
                .ledger
                .remove_item_value(&operation.item, &operation.qty),
        };
        result.with_context(|| {
            format!(
                "Operation {} of {} failed; no changes were saved",
                index + 1,
                operations.len()
            )
        })?;
    }

    let entries: Vec<Value> = session.ledger.log().iter().map(entry_json).collect();
    session.commit()?;
    tracing::info!(count = entries.len(), "batch committed");

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if !ctx.quiet() {
        let count = entries.len().to_string();
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Batch applied", &[("Operations", count.as_str())]),
        );
    }
    Ok(())
}
