//! bigi CLI - library half of the `bigi` binary.
//!
//! Argument handling and command execution live here so they can be tested
//! without spawning a process; `main.rs` only prints and sets the exit code.

pub mod commands;
mod config;
mod error;

use std::sync::Once;

pub use commands::Command;
pub use config::CliConfig;
pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the process.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `BIGI_LOG=bigi=trace`, or any `RUST_LOG` filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // `BIGI_LOG` wins over `RUST_LOG`; with neither set, stay silent.
        let filter = if let Ok(directives) = std::env::var("BIGI_LOG") {
            EnvFilter::new(directives)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
