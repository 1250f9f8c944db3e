use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initializes the global `tracing` subscriber exactly once.
///
/// The log level is controlled by the `RUST_LOG` environment variable
/// (e.g. `RUST_LOG=debug`); it defaults to `info` when unset. Safe to call
/// more than once — subsequent calls are no-ops, which matters for tests
/// that each construct a fresh `OrderBook` and want logging enabled.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_logger_is_idempotent() {
        setup_logger();
        setup_logger();
    }
}
