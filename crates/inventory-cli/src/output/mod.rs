//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying stock and
//! activity in JSON or text form.

mod json;
mod text;

// Re-export public API
pub use json::{entry_json, low_stock_json, stock_json};
pub use text::{print_history, print_low_stock, print_stock_report};
