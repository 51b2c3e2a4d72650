use inventory_core::ActivityLogFile;

use crate::app::AppContext;
use crate::cli::HistoryArgs;
use crate::constants::DEFAULT_HISTORY_LIMIT;
use crate::output::print_history;

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let mut lines = ActivityLogFile::new(&settings.log_path).read_lines()?;

    let limit = args.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    if lines.len() > limit {
        lines.drain(..lines.len() - limit);
    }

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }
    print_history(&ui_ctx, &lines);
    Ok(())
}
