//! Logging initialization for the CLI
//!
//! Console-only tracing setup. `RUST_LOG` takes precedence when set;
//! otherwise the verbose flag escalates the default directive.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Errors are ignored: the CLI works without logging, and tests may install
/// a subscriber more than once.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "shopsans=debug,shopsans_cli=debug,shopsans_api=debug,info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
