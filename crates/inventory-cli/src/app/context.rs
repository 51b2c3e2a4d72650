//! Application context for the Inventory CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-resolved settings.

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::ui::UiContext;

use super::resolver::{resolve_settings, Settings};
use super::session::Session;

/// Application context that bundles CLI args with resolved settings.
///
/// This avoids repeatedly reading the config file and threading multiple
/// parameters through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    settings: OnceCell<Settings>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            settings: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the settings, resolving them lazily if needed.
    pub fn settings(&self) -> anyhow::Result<&Settings> {
        self.settings.get_or_try_init(|| resolve_settings(self.cli))
    }

    /// Load the inventory named by the settings.
    pub fn open_session(&self) -> anyhow::Result<Session> {
        Session::open(self.settings()?)
    }

    /// Build the UI context from global output flags.
    pub fn ui_context(&self) -> UiContext {
        UiContext::from_env(self.cli.json, self.cli.format.as_deref(), self.cli.no_color)
    }
}
