//! Stock persistence.
//!
//! The ledger itself never touches the filesystem. A [`StockStore`] loads a
//! stock snapshot before a session and saves it afterwards.

pub mod json_file;
pub mod traits;

pub use json_file::JsonFileStore;
pub use traits::{StockSnapshot, StockStore};
