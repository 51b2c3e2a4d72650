//! UI primitives for the Inventory CLI.
//!
//! - **Context**: Environment detection (TTY, width, color)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and styling
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: String utilities (truncate, unit counts)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{badge, header, hint, print, print_error, receipt, table, Column};
