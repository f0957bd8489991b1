//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Filter directive used when `GENDERSORT_LOG` is unset or invalid.
/// Each `-v` raises the level by one step past `info`.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => "gendersort=debug",
        _ => "gendersort=trace",
    }
}

/// Install a compact stderr subscriber so stdout carries only results.
///
/// `GENDERSORT_LOG` wins over `verbosity`, e.g.
/// `GENDERSORT_LOG=gendersort_analysis=debug,gendersort_storage=warn`.
/// Later calls are no-ops.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(verbosity > 0),
            )
            .with(filter)
            .try_init();
    });
}
