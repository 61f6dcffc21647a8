//! A savings-account ledger: bounded, ordered transaction records, a running
//! balance and live-instance counters, plus the text menu that drives them.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs the global `tracing` subscriber (stderr). `RUST_LOG` wins over
/// the default directive; `verbose` raises the default from `warn` to `info`.
pub fn init_tracing(verbose: bool) {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let default = if verbose {
            "expense_tracker=info"
        } else {
            "expense_tracker=warn"
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
