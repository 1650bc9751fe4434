//! Console-style diagnostics routed through `tracing`.
//!
//! Every helper emits a single event under the `bedrock::diag` target, so a
//! subscriber can keep or drop them as a group. Nothing here writes to stdout
//! directly; without an installed subscriber the events go nowhere.

use tracing_subscriber::EnvFilter;

/// Environment variable read by [`env_filter`].
pub const LOG_ENV: &str = "BEDROCK_LOG";

/// Filter used when [`LOG_ENV`] is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

pub const TARGET: &str = "bedrock::diag";

/// Same level as `info`; kept for callers used to a console-style `log`.
pub fn log(message: &str) {
    tracing::info!(target: TARGET, "{message}");
}

pub fn debug(message: &str) {
    tracing::debug!(target: TARGET, "{message}");
}

pub fn info(message: &str) {
    tracing::info!(target: TARGET, "{message}");
}

pub fn warn(message: &str) {
    tracing::warn!(target: TARGET, "{message}");
}

pub fn error(message: &str) {
    tracing::error!(target: TARGET, "{message}");
}

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global fmt subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .is_ok()
}
