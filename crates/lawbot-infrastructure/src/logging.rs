//! Tracing subscriber setup for host applications.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,lawbot_core=info,lawbot_infrastructure=info,lawbot_application=info";

/// Builds the filter: `RUST_LOG` when set and valid, else `default_filter`.
pub fn build_filter(default_filter: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter)
        .with_context(|| format!("Invalid log filter '{}'", default_filter))
}

/// Installs a global fmt subscriber.
///
/// Returns `Ok(false)` when a global subscriber was already installed, so
/// host apps may call this more than once.
pub fn init_tracing(default_filter: &str) -> Result<bool> {
    let filter = build_filter(default_filter)?;

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
    {
        Ok(()) => {
            tracing::debug!("[Logging] Tracing subscriber installed");
            Ok(true)
        }
        Err(e) => {
            tracing::debug!("[Logging] Subscriber already installed: {}", e);
            Ok(false)
        }
    }
}
