//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so stdout stays clean for command output and
//! `--json`. Level comes from `-v` flags, else `INVENTORY_LOG`, else
//! `RUST_LOG`, else `warn`. ANSI styling only when stderr is a terminal and
//! color is not disabled.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Subsequent calls are no-ops.
pub fn init(verbosity: u8, no_color: bool) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_env("INVENTORY_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_ansi(std::io::stderr().is_terminal(), no_color))
        .try_init();
}

fn use_ansi(stderr_is_tty: bool, no_color: bool) -> bool {
    stderr_is_tty && !no_color && std::env::var_os("NO_COLOR").is_none()
}
