use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the tracing subscriber.
///
/// Log level is taken from `RUST_LOG` (default: info), e.g.
/// `RUST_LOG=lockerfee=debug` to see per-package day-count decisions.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Log to stderr so the quote CSV on stdout stays machine-readable.
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
