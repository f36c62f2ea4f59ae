use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` wins; otherwise the given directive, otherwise `info`.
fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_FILTER)))
}

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info`
pub fn init_logging_default() {
    init_logging_with(None);
}

/// Compact human-readable output, falling back to `filter` when `RUST_LOG` is unset.
/// A no-op if a global subscriber is already installed.
pub fn init_logging_with(filter: Option<&str>) {
    let _ = fmt()
        .with_env_filter(env_filter(filter))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, defaults to `info`
/// - Writes to stdout for consistent container logging behavior
pub fn init_logging_json() {
    init_logging_json_with(None);
}

/// JSON output, falling back to `filter` when `RUST_LOG` is unset.
pub fn init_logging_json_with(filter: Option<&str>) {
    let _ = fmt()
        .with_env_filter(env_filter(filter))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}
