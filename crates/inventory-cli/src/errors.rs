//! Mapping of command failures to exit codes and hints.
//!
//! Commands return `anyhow::Result`. When the root cause is an
//! [`InventoryError`], its kind selects the exit code and hint.

use inventory_core::{ErrorKind, InventoryError};

use crate::constants::exit_codes;

fn inventory_error(err: &anyhow::Error) -> Option<&InventoryError> {
    err.chain().find_map(|cause| cause.downcast_ref::<InventoryError>())
}

/// Exit code for a failed command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match inventory_error(err).map(InventoryError::kind) {
        Some(ErrorKind::Key) => exit_codes::NOT_FOUND,
        Some(ErrorKind::Type) | Some(ErrorKind::Value) => exit_codes::INVALID_INPUT,
        Some(ErrorKind::Storage) | Some(ErrorKind::Format) => exit_codes::STORAGE_FAILED,
        None => exit_codes::GENERAL,
    }
}

/// Split an explicit "\nHint: ..." suffix off an error message.
pub fn split_hint(message: &str) -> (&str, Option<&str>) {
    match message.find("\nHint:") {
        Some(idx) => (&message[..idx], Some(message[idx + "\nHint:".len()..].trim())),
        None => (message, None),
    }
}

/// Contextual hint for a failed command, if one applies.
pub fn error_hint(err: &anyhow::Error) -> Option<String> {
    let hint = match inventory_error(err)?.kind() {
        ErrorKind::Key => "Run `inventory report` to see tracked items.",
        ErrorKind::Type => "Quantities are whole numbers, e.g. `inventory add apple 10`.",
        ErrorKind::Value => {
            "Quantities must be zero or more, and removals cannot exceed the stock on hand."
        }
        ErrorKind::Format => "Fix or remove the stock file; it must be a JSON object of item -> count.",
        ErrorKind::Storage => "Check that the stock and log paths are writable.",
    };
    Some(hint.to_string())
}
