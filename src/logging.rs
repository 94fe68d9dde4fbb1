// ============================================================================
// Logging Setup
// Subscriber installation for binaries and demos (feature = "logging")
// ============================================================================

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact fmt subscriber for this crate's `tracing` events.
///
/// `RUST_LOG` takes precedence; otherwise `ach_utility=info`, or
/// `ach_utility=debug` when `verbose` is set.
///
/// # Errors
/// Fails if a global subscriber has already been installed.
pub fn init_logging(verbose: bool) -> Result<(), TryInitError> {
    let default_directive = if verbose {
        "ach_utility=debug,info"
    } else {
        "ach_utility=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
}
