//! Inventory CLI - track stock levels with an append-only activity log
//!
//! This is the command-line interface for Inventory. It loads the stock
//! file, applies one command to an in-memory ledger, and saves the result.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{apply, demo, history, init, misc, report, stock};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.no_color);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context();

        // `{:#}` keeps the context chain on one line
        let full_message = format!("{:#}", e);
        let (message, explicit_hint) = errors::split_hint(&full_message);
        let hint = explicit_hint
            .map(String::from)
            .or_else(|| errors::error_hint(&e));

        tracing::debug!(error = ?e, "command failed");
        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(errors::exit_code(&e));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Add(args)) => stock::handle_add(ctx, args),
        Some(Commands::Remove(args)) => stock::handle_remove(ctx, args),
        Some(Commands::Qty(args)) => stock::handle_qty(ctx, args),
        Some(Commands::Report) => report::handle_report(ctx),
        Some(Commands::Low(args)) => report::handle_low(ctx, args),
        Some(Commands::History(args)) => history::handle_history(ctx, args),
        Some(Commands::Apply(args)) => apply::handle_apply(ctx, args),
        Some(Commands::Demo) => demo::handle_demo(ctx),
        Some(Commands::Completions(args)) => misc::handle_completions(args.shell),
        None => report::handle_report(ctx),
    }
}
