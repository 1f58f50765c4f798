//! Tracing subscriber setup for hosts that do not install their own.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Returns `false`
/// when a global subscriber was already set (the call is then a no-op).
pub fn init(config: &LoggingConfig) -> bool {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(filter_for(config, from_env.as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// Directive precedence: a valid env directive, then the configured filter,
/// then `info`.
fn filter_for(config: &LoggingConfig, from_env: Option<&str>) -> EnvFilter {
    from_env
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(&config.filter).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
