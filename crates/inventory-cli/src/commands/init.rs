//! `init`: write a config file and an empty stock file.

use std::path::PathBuf;

use inventory_core::{JsonFileStore, StockSnapshot, StockStore, ZeroStockPolicy};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_data_path, default_log_path, write_config, InventoryConfig};
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ));
    }

    let cli = ctx.cli();
    let data_path = match &cli.data {
        Some(path) => PathBuf::from(path),
        None => default_data_path()?,
    };
    let log_path = match &cli.log_file {
        Some(path) => PathBuf::from(path),
        None => default_log_path()?,
    };
    let zero_policy = if args.delete_empty {
        ZeroStockPolicy::Delete
    } else {
        ZeroStockPolicy::Retain
    };
    let low_threshold = args
        .low_threshold
        .unwrap_or(inventory_core::DEFAULT_LOW_THRESHOLD);

    let config = InventoryConfig::new(data_path.clone(), log_path.clone(), low_threshold, zero_policy);
    write_config(&config_path, &config)?;

    let store = JsonFileStore::new(&data_path);
    let created_stock = !data_path.exists();
    if created_stock {
        store.save(&StockSnapshot::new())?;
    }
    tracing::info!(config = %config_path.display(), data = %data_path.display(), "initialized");

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        let value = serde_json::json!({
            "config_path": config_path,
            "data_path": data_path,
            "log_path": log_path,
            "created_stock_file": created_stock,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    if ctx.quiet() {
        return Ok(());
    }

    let config_display = config_path.display().to_string();
    let data_display = data_path.display().to_string();
    let log_display = log_path.display().to_string();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Initialized inventory",
            &[
                ("Config", config_display.as_str()),
                ("Stock file", data_display.as_str()),
                ("Log file", log_display.as_str()),
            ],
        ),
    );
    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &hint(&ui_ctx, "inventory add <item> <qty>"));
    }
    Ok(())
}
