//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `BAYES_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "bayes=info";

/// Initialize the tracing/logging system.
///
/// Reads the `BAYES_LOG` environment variable for per-module log levels,
/// e.g. `BAYES_LOG=bayes_average=trace,bayes_core=debug`.
///
/// Idempotent. If another global subscriber is already installed the call
/// is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("BAYES_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
