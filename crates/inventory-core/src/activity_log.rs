//! Activity log file.
//!
//! Log entries are appended as text lines, one per entry, UTF-8 encoded.
//! Each call opens and closes its own file handle.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::entry::LogEntry;
use crate::error::{InventoryError, Result};

/// Append-only text file holding activity log lines.
#[derive(Debug, Clone)]
pub struct ActivityLogFile {
    path: PathBuf,
}

impl ActivityLogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `entries` to the file, creating it (and its directory) if needed.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Storage` if the file cannot be opened or written.
    pub fn append(&self, entries: &[LogEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                InventoryError::Storage(format!(
                    "Failed to open log {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        let mut writer = BufWriter::new(file);
        for entry in entries {
            writeln!(writer, "{}", entry)?;
        }
        writer.flush()?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "appended log lines");
        Ok(())
    }

    /// Read all log lines, oldest first. A missing file has no lines.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.lines().map(String::from).collect()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }
}
