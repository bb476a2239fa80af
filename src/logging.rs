use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*};

/// Initialize a stderr logger.
///
/// # Arguments
/// * `no_color` - Disable ANSI colors in stderr output
/// * `log_level` - Override log level (otherwise uses RUST_LOG or defaults to "info")
///
/// A global subscriber can only be installed once per process, so
/// callers that may race (tests in particular) discard the result:
/// `let _ = init_logger(false, Some("debug"));`.
pub fn init_logger(no_color: bool, log_level: Option<&str>) -> Result<(), TryInitError> {
    // Configure the stderr log level based on whether a level was provided
    let stderr_filter = match log_level {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => {
            // Fall back to RUST_LOG or default to "info"
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_filter(stderr_filter);

    tracing_subscriber::registry().with(stderr_layer).try_init()
}
