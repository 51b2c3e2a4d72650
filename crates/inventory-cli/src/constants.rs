//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Item not found in the inventory.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid operand (wrong type or value).
    pub const INVALID_INPUT: i32 = 4;

    /// Stock or log file could not be read, parsed, or written.
    pub const STORAGE_FAILED: i32 = 5;
}

/// Number of log lines `history` shows when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;
