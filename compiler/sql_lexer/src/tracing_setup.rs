//! Log output for the scanner's `tracing` events.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "RUST_LOG";

/// Fallback when the directives in [`LOG_ENV`] do not parse.
const FALLBACK_DIRECTIVE: &str = "sql_lexer=warn";

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install a stderr subscriber for scanner events when [`LOG_ENV`] is set,
/// e.g. `RUST_LOG=sql_lexer=trace`.
///
/// Returns whether the global subscriber is the one installed here. Only
/// the first call does any work; later calls repeat its answer. A
/// subscriber the host application set up first stays in place.
pub fn init_tracing() -> bool {
    *INSTALLED.get_or_init(|| {
        let Ok(directives) = std::env::var(LOG_ENV) else {
            return false;
        };
        let filter = EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init()
            .is_ok()
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
