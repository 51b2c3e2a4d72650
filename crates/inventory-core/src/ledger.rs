//! The in-memory inventory ledger.
//!
//! An [`InventoryLedger`] owns a stock map and an append-only activity log.
//! All mutation goes through [`InventoryLedger::add_item`] and
//! [`InventoryLedger::remove_item`], which validate before touching state:
//! a rejected call leaves both the stock and the log exactly as they were.
//!
//! The ledger performs no I/O. Persisting stock or log lines is left to
//! [`crate::storage`] and [`crate::activity_log`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entry::{Action, LogEntry};
use crate::error::{InventoryError, Result};
use crate::operand;

/// Low-stock threshold used when the caller does not supply one.
pub const DEFAULT_LOW_THRESHOLD: u64 = 5;

/// What happens to an item whose stock is removed down to exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroStockPolicy {
    /// Keep the key with quantity 0
    #[default]
    Retain,
    /// Drop the key from the stock map
    Delete,
}

/// Item name → quantity map plus the log of successful mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryLedger {
    stock: BTreeMap<String, u64>,
    log: Vec<LogEntry>,
    policy: ZeroStockPolicy,
}

impl InventoryLedger {
    /// Create an empty ledger with its own, freshly allocated stock and log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a ledger from a previously saved stock snapshot.
    ///
    /// The log starts empty; it only records mutations made in this session.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Value` if any item name is blank.
    pub fn from_stock(stock: BTreeMap<String, u64>) -> Result<Self> {
        for name in stock.keys() {
            operand::validate_name(name)?;
        }
        Ok(Self {
            stock,
            ..Self::default()
        })
    }

    pub fn with_policy(mut self, policy: ZeroStockPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ZeroStockPolicy {
        self.policy
    }

    /// Add `quantity` units of `name`, creating the item if needed.
    ///
    /// # Errors
    ///
    /// - `Value` if `name` is blank, `quantity` is negative, or the new
    ///   total would overflow
    pub fn add_item(&mut self, name: &str, quantity: i64) -> Result<LogEntry> {
        operand::validate_name(name)?;
        let quantity = non_negative(quantity)?;

        let current = self.stock.get(name).copied().unwrap_or(0);
        let updated = current.checked_add(quantity).ok_or_else(|| {
            InventoryError::value(format!(
                "Adding {} to '{}' would overflow the stock count",
                quantity, name
            ))
        })?;
        self.stock.insert(name.to_string(), updated);

        tracing::debug!(item = name, quantity, total = updated, "added stock");
        Ok(self.record(Action::Added, name, quantity))
    }

    /// Remove `quantity` units of `name`.
    ///
    /// When the result is zero, [`ZeroStockPolicy`] decides whether the key stays.
    ///
    /// # Errors
    ///
    /// - `Value` if `quantity` is negative or exceeds the current stock
    /// - `Key` if `name` is not in the inventory
    pub fn remove_item(&mut self, name: &str, quantity: i64) -> Result<LogEntry> {
        let quantity = non_negative(quantity)?;
        let current = self
            .stock
            .get_mut(name)
            .ok_or_else(|| InventoryError::missing_item(name))?;

        if quantity > *current {
            return Err(InventoryError::value(format!(
                "Cannot remove {} of '{}': only {} in stock",
                quantity, name, current
            )));
        }
        *current -= quantity;
        let remaining = *current;

        if remaining == 0 && self.policy == ZeroStockPolicy::Delete {
            self.stock.remove(name);
        }

        tracing::debug!(item = name, quantity, remaining, "removed stock");
        Ok(self.record(Action::Removed, name, quantity))
    }

    /// Current quantity of `name`.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Key` if the item is absent.
    pub fn get_quantity(&self, name: &str) -> Result<u64> {
        self.stock
            .get(name)
            .copied()
            .ok_or_else(|| InventoryError::missing_item(name))
    }

    /// [`add_item`](Self::add_item) for untyped operands.
    ///
    /// # Errors
    ///
    /// `Type` if `name` is not a string or `quantity` is not an integer,
    /// otherwise as `add_item`.
    pub fn add_item_value(&mut self, name: &Value, quantity: &Value) -> Result<LogEntry> {
        let name = operand::item_name(name)?;
        let quantity = operand::quantity(quantity)?;
        self.add_item(name, quantity)
    }

    /// [`remove_item`](Self::remove_item) for untyped operands.
    pub fn remove_item_value(&mut self, name: &Value, quantity: &Value) -> Result<LogEntry> {
        let name = operand::item_name(name)?;
        let quantity = operand::quantity(quantity)?;
        self.remove_item(name, quantity)
    }

    /// [`get_quantity`](Self::get_quantity) for an untyped name.
    pub fn get_quantity_value(&self, name: &Value) -> Result<u64> {
        self.get_quantity(operand::item_name(name)?)
    }

    /// Names of items whose quantity is strictly below `threshold`, in name order.
    pub fn low_stock(&self, threshold: u64) -> Vec<&str> {
        self.stock
            .iter()
            .filter(|&(_, &qty)| qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn stock(&self) -> &BTreeMap<String, u64> {
        &self.stock
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stock.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Sum of all quantities (saturating).
    pub fn total_units(&self) -> u64 {
        self.stock
            .values()
            .fold(0u64, |acc, qty| acc.saturating_add(*qty))
    }

    fn record(&mut self, action: Action, name: &str, quantity: u64) -> LogEntry {
        let entry = LogEntry::new(action, name, quantity);
        self.log.push(entry.clone());
        entry
    }
}

fn non_negative(quantity: i64) -> Result<u64> {
    u64::try_from(quantity).map_err(|_| {
        InventoryError::value(format!("Quantity cannot be negative, got {}", quantity))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn stocked() -> InventoryLedger {
        let mut ledger = InventoryLedger::new();
        ledger.add_item("apple", 10).unwrap();
        ledger
    }

    #[test]
    fn test_add_new_item() {
        let mut ledger = InventoryLedger::new();
        let entry = ledger.add_item("apple", 10).unwrap();

        assert_eq!(ledger.get_quantity("apple").unwrap(), 10);
        assert_eq!(entry.action, Action::Added);
        assert_eq!(entry.quantity, 10);
        assert!(entry.to_string().ends_with(": Added 10 of apple"));
        assert_eq!(ledger.log(), &[entry]);
    }

    #[test]
    fn test_add_existing_item_increments() {
        let mut ledger = stocked();
        ledger.add_item("apple", 5).unwrap();
        assert_eq!(ledger.get_quantity("apple").unwrap(), 15);
        assert_eq!(ledger.log().len(), 2);
    }

    #[test]
    fn test_add_zero_creates_item() {
        let mut ledger = InventoryLedger::new();
        ledger.add_item("pear", 0).unwrap();
        assert_eq!(ledger.get_quantity("pear").unwrap(), 0);
    }

    #[test]
    fn test_add_negative_is_value_error() {
        let mut ledger = InventoryLedger::new();
        let err = ledger.add_item("apple", -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(!ledger.contains("apple"));
        assert!(ledger.log().is_empty());
    }

    #[test]
    fn test_add_negative_leaves_existing_stock() {
        let mut ledger = stocked();
        assert!(ledger.add_item("apple", -3).is_err());
        assert_eq!(ledger.get_quantity("apple").unwrap(), 10);
    }

    #[test]
    fn test_add_blank_name_is_value_error() {
        let mut ledger = InventoryLedger::new();
        let err = ledger.add_item("  ", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_multiline_name_is_value_error() {
        let mut ledger = InventoryLedger::new();
        let err = ledger
            .add_item("apple\n2099-01-01T00:00:00+00:00: Removed 999 of pear", 1)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        let err = ledger
            .add_item_value(&json!("apple\r"), &json!(1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        let mut stock = BTreeMap::new();
        stock.insert("pear\nforged".to_string(), 1);
        assert!(InventoryLedger::from_stock(stock).is_err());

        assert!(ledger.is_empty());
        assert!(ledger.log().is_empty());
    }

    #[test]
    fn test_add_overflow_is_value_error() {
        let mut ledger = InventoryLedger::new();
        ledger.add_item("bolt", i64::MAX).unwrap();
        ledger.add_item("bolt", i64::MAX).unwrap();
        let err = ledger.add_item("bolt", 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(ledger.get_quantity("bolt").unwrap(), i64::MAX as u64 * 2);
    }

    #[test]
    fn test_add_value_rejects_wrong_types() {
        let mut ledger = InventoryLedger::new();

        let err = ledger.add_item_value(&json!(123), &json!(5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        let err = ledger.add_item_value(&json!("apple"), &json!("ten")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        assert!(ledger.is_empty());
        assert!(ledger.log().is_empty());
    }

    #[test]
    fn test_add_value_accepts_valid_operands() {
        let mut ledger = InventoryLedger::new();
        ledger.add_item_value(&json!("apple"), &json!(3)).unwrap();
        assert_eq!(ledger.get_quantity_value(&json!("apple")).unwrap(), 3);
    }

    #[test]
    fn test_remove_decrements() {
        let mut ledger = stocked();
        let entry = ledger.remove_item("apple", 3).unwrap();
        assert_eq!(ledger.get_quantity("apple").unwrap(), 7);
        assert_eq!(entry.action, Action::Removed);
        assert!(entry.to_string().ends_with(": Removed 3 of apple"));
    }

    #[test]
    fn test_remove_missing_is_key_error() {
        let mut ledger = stocked();
        let err = ledger.remove_item("orange", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);
        assert!(err.to_string().contains("'orange'"));
        assert_eq!(ledger.log().len(), 1);
    }

    #[test]
    fn test_remove_more_than_stock_is_value_error() {
        let mut ledger = stocked();
        let err = ledger.remove_item("apple", 11).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(ledger.get_quantity("apple").unwrap(), 10);
        assert_eq!(ledger.log().len(), 1);
    }

    #[test]
    fn test_remove_negative_is_value_error() {
        let mut ledger = stocked();
        let err = ledger.remove_item("apple", -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(ledger.get_quantity("apple").unwrap(), 10);
    }

    #[test]
    fn test_remove_to_zero_retains_key_by_default() {
        let mut ledger = stocked();
        ledger.remove_item("apple", 10).unwrap();
        assert_eq!(ledger.get_quantity("apple").unwrap(), 0);
    }

    #[test]
    fn test_remove_to_zero_with_delete_policy() {
        let mut ledger = InventoryLedger::new().with_policy(ZeroStockPolicy::Delete);
        ledger.add_item("apple", 4).unwrap();
        ledger.remove_item("apple", 4).unwrap();
        assert!(!ledger.contains("apple"));
        assert_eq!(
            ledger.get_quantity("apple").unwrap_err().kind(),
            ErrorKind::Key
        );
        assert_eq!(ledger.log().len(), 2);
    }

    #[test]
    fn test_remove_value_rejects_wrong_types() {
        let mut ledger = stocked();
        let err = ledger.remove_item_value(&json!(["apple"]), &json!(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = ledger.remove_item_value(&json!("apple"), &json!(1.5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(ledger.get_quantity("apple").unwrap(), 10);
    }

    #[test]
    fn test_get_quantity_missing_is_key_error() {
        let ledger = stocked();
        let before = ledger.clone();
        let err = ledger.get_quantity("kiwi").unwrap_err();
        assert_eq!(err, InventoryError::missing_item("kiwi"));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_low_stock() {
        let mut ledger = InventoryLedger::new();
        ledger.add_item("apple", 10).unwrap();
        ledger.add_item("banana", 2).unwrap();
        ledger.add_item("cherry", 5).unwrap();
        ledger.add_item("date", 0).unwrap();

        assert_eq!(ledger.low_stock(DEFAULT_LOW_THRESHOLD), vec!["banana", "date"]);
        assert_eq!(ledger.low_stock(0), Vec::<&str>::new());
    }

    #[test]
    fn test_independent_ledgers_do_not_share_state() {
        let mut first = InventoryLedger::new();
        let second = InventoryLedger::new();

        first.add_item("apple", 1).unwrap();

        assert!(second.is_empty());
        assert!(second.log().is_empty());
    }

    #[test]
    fn test_from_stock_rejects_blank_names() {
        let mut stock = BTreeMap::new();
        stock.insert(" ".to_string(), 1);
        let err = InventoryLedger::from_stock(stock).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_from_stock_starts_with_empty_log() {
        let mut stock = BTreeMap::new();
        stock.insert("apple".to_string(), 3);
        stock.insert("pear".to_string(), 4);
        let ledger = InventoryLedger::from_stock(stock).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total_units(), 7);
        assert!(ledger.log().is_empty());
    }
}
