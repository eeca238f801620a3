//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Moat tracing/logging system.
///
/// Reads `MOAT_LOG` for per-module log levels, e.g.
/// `MOAT_LOG=moat_analysis::ledger=debug,moat_analysis=info`.
/// Falls back to `moat=info` if `MOAT_LOG` is not set or is invalid.
///
/// Logs go to stderr so a report written to stdout stays clean.
/// Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("MOAT_LOG").unwrap_or_else(|_| EnvFilter::new("moat=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
