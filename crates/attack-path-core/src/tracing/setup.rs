//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "ATTACK_PATH_LOG";

/// Default filter when `ATTACK_PATH_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "attack_path=info";

/// Initialize the tracing/logging system.
///
/// Reads `ATTACK_PATH_LOG` for per-module log levels, e.g.
/// `ATTACK_PATH_LOG=attack_path_graph=debug,attack_path_cli=info`.
///
/// Falls back to [`DEFAULT_FILTER`] if the variable is not set or is invalid.
/// Calling it more than once is a no-op, as is calling it after another
/// global subscriber has been installed.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init()
            .ok();
    });
}
