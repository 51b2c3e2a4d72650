//! Conversion of loosely-typed input into ledger operands.
//!
//! Ledger methods take `&str` and `i64`, so the compiler rules out wrong
//! operand types for Rust callers. Input arriving as JSON or as raw CLI text
//! has no such guarantee; it passes through these functions, which raise
//! [`InventoryError::Type`] when the shape is wrong.

use std::num::IntErrorKind;

use serde_json::Value;

use crate::error::{InventoryError, Result};

/// Human-readable name of a JSON value's type, used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract an item name from a JSON value.
///
/// # Errors
///
/// - `Type` if the value is not a string
/// - `Value` if the string is blank
pub fn item_name(value: &Value) -> Result<&str> {
    let name = value.as_str().ok_or_else(|| {
        InventoryError::type_error(format!(
            "Item must be a string, got {}",
            json_type_name(value)
        ))
    })?;
    validate_name(name)?;
    Ok(name)
}

/// Extract a signed quantity from a JSON value.
///
/// The sign is not checked here; negative quantities are a value error
/// raised by the ledger operation itself.
pub fn quantity(value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) if n.is_i64() => n
            .as_i64()
            .ok_or_else(|| InventoryError::type_error("Quantity must be an integer")),
        Value::Number(n) if n.is_u64() => Err(InventoryError::value(format!(
            "Quantity is too large, got {}",
            n
        ))),
        other => Err(InventoryError::type_error(format!(
            "Quantity must be an integer, got {}",
            json_type_name(other)
        ))),
    }
}

/// Parse a quantity typed on the command line.
///
/// Integers outside the `i64` range are a `Value` error, matching the JSON path.
pub fn parse_quantity(text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InventoryError::value(format!("Quantity {} is out of range", text.trim()))
        }
        _ => InventoryError::type_error(format!("Quantity must be an integer, got '{}'", text)),
    })
}

/// Reject blank item names and names containing control characters.
///
/// Each log entry is written as one text line, so a name must not be able to
/// break or forge a line.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InventoryError::value("Item name cannot be empty"));
    }
    if name.chars().any(char::is_control) {
        return Err(InventoryError::value(format!(
            "Item name cannot contain control characters: {:?}",
            name
        )));
    }
    Ok(())
}
