//! Logging setup.
//!
//! All diagnostics go to stderr so stdout carries only the summary or the
//! error line.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `debug`.
pub const LOG_ENV_VAR: &str = "LIGHTHOUSE_SUMMARY_LOG";

static INIT: Once = Once::new();

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the tracing subscriber. Later calls are no-ops.
///
/// `LIGHTHOUSE_SUMMARY_LOG` wins over the verbosity-derived default.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbosity > 1),
            )
            .with(filter)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "debug");
        assert_eq!(default_directive(5), "trace");
    }
}
