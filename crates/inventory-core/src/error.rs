//! Error types for inventory core operations.
//!
//! Every rejected operation maps to exactly one variant. Errors are raised at
//! the point of violation; the CLI layer maps them to user-friendly messages.

use thiserror::Error;

/// Result type alias for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Core error type for inventory operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An operand had the wrong type (e.g. a number where an item name was expected)
    #[error("Type error: {0}")]
    Type(String),

    /// A correctly typed operand had an invalid value (negative quantity, insufficient stock)
    #[error("Value error: {0}")]
    Value(String),

    /// The referenced item is not in the inventory
    #[error("Key error: {0}")]
    Key(String),

    /// Reading or writing a backing file failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stock snapshot could not be parsed
    #[error("Format error: {0}")]
    Format(String),
}

/// Discriminant of [`InventoryError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
    Key,
    Storage,
    Format,
}

impl InventoryError {
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    pub fn value(msg: impl Into<String>) -> Self {
        Self::Value(msg.into())
    }

    /// Key error for a missing item, with the message naming it.
    pub fn missing_item(item: &str) -> Self {
        Self::Key(format!("Item '{}' not found in inventory", item))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type(_) => ErrorKind::Type,
            Self::Value(_) => ErrorKind::Value,
            Self::Key(_) => ErrorKind::Key,
            Self::Storage(_) => ErrorKind::Storage,
            Self::Format(_) => ErrorKind::Format,
        }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Format(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_item_names_the_item() {
        let err = InventoryError::missing_item("orange");
        assert_eq!(err.kind(), ErrorKind::Key);
        assert_eq!(
            err.to_string(),
            "Key error: Item 'orange' not found in inventory"
        );
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InventoryError = io.into();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_json_error_maps_to_format() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: InventoryError = parse.into();
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}
