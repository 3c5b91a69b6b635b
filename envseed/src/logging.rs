//! Diagnostic tracing for envseed.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. Operator-facing
//! status lines and the file echo go to stdout and are unaffected by it.
//!
//! Events carry paths, key names, lengths and masked values
//! ([`crate::core::mask::mask`]); a raw secret never reaches a log field.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=envseed=debug envseed write
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
