//! Application-level utilities for the Inventory CLI.
//!
//! This module provides:
//! - Path and setting resolution (flags, env, config file, defaults)
//! - The per-invocation application context
//! - Loading and committing an inventory session

mod context;
mod resolver;
mod session;

// Re-export public API
pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_settings, Settings};
pub use session::Session;
