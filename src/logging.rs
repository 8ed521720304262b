//! Subscriber setup for native hosts. `TracingSink` output lands here.

use tracing_subscriber::{fmt, EnvFilter};

pub const JSON_ENV: &str = "RTC_SUPPORT_LOG_JSON";

/// Install a stderr subscriber filtered by `RUST_LOG` (default `info`).
/// Returns false when a global subscriber was already set.
pub fn init_logging() -> bool {
    init_logging_with_default("info")
}

/// Same as [`init_logging`] with a caller-chosen fallback filter directive.
pub fn init_logging_with_default(directive: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if json_requested() {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };
    installed.is_ok()
}

fn json_requested() -> bool {
    std::env::var(JSON_ENV).map(|value| value == "1").unwrap_or(false)
}
