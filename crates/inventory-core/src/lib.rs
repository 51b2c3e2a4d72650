//! # Inventory Core
//!
//! Core library for Inventory - a small stock-tracking ledger with an
//! append-only activity log.
//!
//! This crate provides the domain logic and file collaborators independent
//! of the CLI interface.
//!
//! ## Architecture
//!
//! - **ledger**: `InventoryLedger`, validated add/remove/query
//! - **entry**: activity log entries and their text form
//! - **operand**: conversion of untyped input (JSON, CLI text) into operands
//! - **storage**: stock snapshot persistence (JSON file)
//! - **activity_log**: append-only log file writer

pub mod activity_log;
pub mod entry;
pub mod error;
pub mod fs;
pub mod ledger;
pub mod operand;
pub mod storage;

pub use activity_log::ActivityLogFile;
pub use entry::{Action, LogEntry};
pub use error::{ErrorKind, InventoryError, Result};
pub use ledger::{InventoryLedger, ZeroStockPolicy, DEFAULT_LOW_THRESHOLD};
pub use storage::{JsonFileStore, StockSnapshot, StockStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
