//! Tracing initialization for binary surfaces.
//!
//! The library itself only emits `tracing` events; installing a
//! subscriber is the binary's call. `RUST_LOG` overrides the default
//! filter when set.

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber with the given default filter.
///
/// Returns whether a subscriber was installed; false means one was
/// already set (harmless, e.g. in tests).
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_does_not_panic() {
        init_tracing("info");
        init_tracing("debug");
    }
}
