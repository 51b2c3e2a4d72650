//! JSON file stock store.
//!
//! The snapshot is a single pretty-printed JSON object mapping item names to
//! quantities. Saves replace the file atomically.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{InventoryError, Result};
use crate::operand;
use crate::storage::traits::{StockSnapshot, StockStore};

/// Stock store backed by a UTF-8 JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(contents: &str) -> Result<StockSnapshot> {
        let object: Map<String, Value> = serde_json::from_str(contents)?;
        let mut stock = StockSnapshot::new();
        for (item, value) in object {
            operand::validate_name(&item)?;
            let quantity = match value.as_u64() {
                Some(quantity) => quantity,
                None => {
                    let signed = operand::quantity(&value).map_err(|e| with_item(e, &item))?;
                    return Err(InventoryError::value(format!(
                        "Stored quantity for '{}' is negative: {}",
                        item, signed
                    )));
                }
            };
            stock.insert(item, quantity);
        }
        Ok(stock)
    }
}

impl StockStore for JsonFileStore {
    fn load(&self) -> Result<Option<StockSnapshot>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "stock file not found");
                return Ok(None);
            }
            Err(err) => {
                return Err(InventoryError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        let stock = Self::parse(&contents).map_err(|err| match err {
            InventoryError::Format(msg) => InventoryError::Format(format!(
                "Invalid JSON in {}: {}",
                self.path.display(),
                msg
            )),
            other => other,
        })?;
        tracing::debug!(path = %self.path.display(), items = stock.len(), "loaded stock");
        Ok(Some(stock))
    }

    fn save(&self, stock: &StockSnapshot) -> Result<()> {
        let mut json = serde_json::to_string_pretty(stock)?;
        json.push('\n');
        crate::fs::write_atomic(&self.path, json.as_bytes()).map_err(|e| {
            InventoryError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(path = %self.path.display(), items = stock.len(), "saved stock");
        Ok(())
    }
}

fn with_item(err: InventoryError, item: &str) -> InventoryError {
    match err {
        InventoryError::Type(msg) => InventoryError::Type(format!("{} (item '{}')", msg, item)),
        InventoryError::Value(msg) => InventoryError::Value(format!("{} (item '{}')", msg, item)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn test_parse_valid_snapshot() {
        let stock = JsonFileStore::parse(r#"{"apple": 7, "pear": 0}"#).unwrap();
        assert_eq!(stock.get("apple"), Some(&7));
        assert_eq!(stock.get("pear"), Some(&0));
    }

    #[test]
    fn test_parse_rejects_string_quantity() {
        let err = JsonFileStore::parse(r#"{"apple": "ten"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("'apple'"));
    }

    #[test]
    fn test_parse_rejects_negative_quantity() {
        let err = JsonFileStore::parse(r#"{"apple": -2}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = JsonFileStore::parse("[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_parse_accepts_full_u64_range() {
        let stock = JsonFileStore::parse(&format!(r#"{{"bolt": {}}}"#, u64::MAX)).unwrap();
        assert_eq!(stock.get("bolt"), Some(&u64::MAX));
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("stock.json"));
        let mut stock = StockSnapshot::new();
        stock.insert("apple".to_string(), 3);
        store.save(&stock).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "{\n  \"apple\": 3\n}\n");
    }
}
