//! A loaded inventory: ledger plus the files it came from.

use anyhow::Context;
use inventory_core::{ActivityLogFile, InventoryLedger, JsonFileStore, StockSnapshot, StockStore};

use super::resolver::Settings;

/// One command's view of the inventory.
///
/// Mutating commands change `ledger` and then call [`Session::commit`];
/// read-only commands simply drop the session.
pub struct Session {
    pub ledger: InventoryLedger,
    store: JsonFileStore,
    log_file: ActivityLogFile,
    /// Snapshot as loaded; `None` when no stock file existed.
    previous: Option<StockSnapshot>,
}

impl Session {
    /// Load the stock file named in `settings`.
    ///
    /// A missing stock file yields an empty inventory.
    pub fn open(settings: &Settings) -> anyhow::Result<Self> {
        let store = JsonFileStore::new(&settings.data_path);
        let stock = store
            .load()
            .with_context(|| format!("Failed to load {}", settings.data_path.display()))?;
        let ledger = match stock.clone() {
            Some(stock) => InventoryLedger::from_stock(stock)?,
            None => {
                tracing::warn!(
                    path = %settings.data_path.display(),
                    "starting with empty inventory"
                );
                InventoryLedger::new()
            }
        }
        .with_policy(settings.zero_policy);

        Ok(Self {
            ledger,
            store,
            log_file: ActivityLogFile::new(&settings.log_path),
            previous: stock,
        })
    }

    /// Persist stock and append this session's log entries.
    ///
    /// If the log cannot be written, the stock file is put back the way it
    /// was loaded, so a failed command leaves no unlogged mutation behind.
    pub fn commit(self) -> anyhow::Result<()> {
        self.store
            .save(self.ledger.stock())
            .with_context(|| format!("Failed to save {}", self.store.path().display()))?;

        if let Err(err) = self.log_file.append(self.ledger.log()) {
            self.rollback();
            return Err(err).with_context(|| {
                format!("Failed to write log {}", self.log_file.path().display())
            });
        }
        Ok(())
    }

    fn rollback(&self) {
        let restored = match &self.previous {
            Some(previous) => self.store.save(previous).map_err(anyhow::Error::from),
            None => std::fs::remove_file(self.store.path()).map_err(anyhow::Error::from),
        };
        match restored {
            Ok(()) => tracing::warn!(path = %self.store.path().display(), "stock change rolled back"),
            Err(err) => tracing::error!(
                path = %self.store.path().display(),
                error = %err,
                "failed to roll back stock change"
            ),
        }
    }
}
