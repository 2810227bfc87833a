//! Diagnostic logging for the `bridgehand` binary.
//!
//! Engine and command code emit `tracing` events; this module installs the
//! subscriber that prints them to stderr. Command output on stdout is never
//! mixed with log lines.

use std::sync::OnceLock;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the process. Later calls are no-ops.
pub fn init_logging() {
    static INIT: OnceLock<()> = OnceLock::new();

    INIT.get_or_init(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let subscriber = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();

        // Another global subscriber (e.g. from a test harness) wins.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
