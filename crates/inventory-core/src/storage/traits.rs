//! Stock store trait definition.
//!
//! The `StockStore` trait is the seam between the in-memory ledger and
//! whatever holds stock between sessions. Only a JSON file backend exists
//! today.

use std::collections::BTreeMap;

use crate::error::Result;

/// Item name → quantity, as persisted between sessions.
pub type StockSnapshot = BTreeMap<String, u64>;

/// Storage interface for stock snapshots.
///
/// Implementations must ensure:
/// - A snapshot that was saved loads back unchanged
/// - A failed save leaves the previous snapshot readable
/// - Loaded quantities are validated before they reach a ledger
pub trait StockStore {
    /// Load the saved snapshot.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// - `InventoryError::Format` if the stored data cannot be parsed
    /// - `InventoryError::Type` / `InventoryError::Value` if a stored
    ///   quantity is not a non-negative integer
    /// - `InventoryError::Storage` on I/O failure
    fn load(&self) -> Result<Option<StockSnapshot>>;

    /// Replace the saved snapshot with `stock`.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Storage` if the snapshot cannot be written.
    fn save(&self, stock: &StockSnapshot) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn_store(_store: &dyn StockStore) {}
    }
}
