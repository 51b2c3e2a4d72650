use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use inventory_core::VERSION;

/// Inventory - track stock levels with an append-only activity log
#[derive(Parser)]
#[command(name = "inventory")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the stock file (JSON)
    #[arg(short, long, global = true, env = "INVENTORY_DATA")]
    pub data: Option<String>,

    /// Path to the activity log file
    #[arg(long, global = true, env = "INVENTORY_LOG_FILE")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (pretty, plain)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase diagnostic logging on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Low-stock threshold to record in the config
    #[arg(long)]
    pub low_threshold: Option<u64>,

    /// Delete items whose stock reaches zero instead of keeping them at 0
    #[arg(long)]
    pub delete_empty: bool,
}

/// Arguments for the `add` and `remove` commands
#[derive(Args)]
pub struct StockArgs {
    /// Item name
    #[arg(value_name = "ITEM")]
    pub item: String,

    /// Quantity (non-negative integer)
    #[arg(value_name = "QTY", allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for the `qty` command
#[derive(Args)]
pub struct QtyArgs {
    /// Item name
    #[arg(value_name = "ITEM")]
    pub item: String,
}

/// Arguments for the `low` command
#[derive(Args)]
pub struct LowArgs {
    /// Report items with fewer units than this
    #[arg(long)]
    pub threshold: Option<u64>,
}

/// Arguments for the `history` command
#[derive(Args)]
pub struct HistoryArgs {
    /// Show only the most recent N lines
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `apply` command
#[derive(Args)]
pub struct ApplyArgs {
    /// JSON file with an array of {"op", "item", "qty"} operations ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub file: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config and an empty stock file
    Init(InitArgs),

    /// Add units of an item
    Add(StockArgs),

    /// Remove units of an item
    Remove(StockArgs),

    /// Show the quantity of an item
    Qty(QtyArgs),

    /// Show all items and their quantities
    Report,

    /// List items below the low-stock threshold
    Low(LowArgs),

    /// Show the activity log
    History(HistoryArgs),

    /// Apply a batch of operations from a JSON file
    Apply(ApplyArgs),

    /// Run a scripted demonstration on a scratch inventory
    Demo,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
