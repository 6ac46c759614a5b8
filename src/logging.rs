use tracing_subscriber::{filter::EnvFilter, fmt::Layer, prelude::*, registry::Registry};

use crate::{Error, Result};

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: `warn`).
///
/// stdout is reserved for measurements.
pub fn init() -> Result<()> {
    let stderr_layer = Layer::new()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| Error::LoggingSetup(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error() {
        // Other tests in this binary don't install a subscriber, so the
        // first call may or may not be the one that wins.
        let _ = init();
        assert!(matches!(init(), Err(Error::LoggingSetup(_))));
    }
}
