//! Diagnostic tracing.
//!
//! The library emits `tracing` events (validation, input parsing, halt and
//! failure, recorded history); this module installs the subscriber the
//! binary uses to print them.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr so it never
/// mixes with program output.
///
/// # Example
/// ```bash
/// RUST_LOG=tapemachine=debug tapemachine hello.bf
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
