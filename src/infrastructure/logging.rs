//! Logging setup

use crate::infrastructure::Config;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "AZBLOG_LOG";

/// Install a stderr subscriber. Filter comes from AZBLOG_LOG, falling back to
/// `config.log_filter`. Calling this twice is harmless.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
