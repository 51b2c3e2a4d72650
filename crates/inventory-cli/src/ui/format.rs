//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a unit count with its noun, e.g. "1 unit", "3 units".
pub fn units(count: u64) -> String {
    if count == 1 {
        "1 unit".to_string()
    } else {
        format!("{} units", count)
    }
}
