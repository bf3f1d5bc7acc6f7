//! ## Logging Configuration
//!
//! Installs a `tracing_subscriber` fmt subscriber for the dashboard binary.
//! The level is `DEBUG` when `--verbose` is passed or when the
//! `YELP_DASHBOARD_DEBUG` environment variable is set to anything other than
//! an empty string, `"0"` or `"false"`; otherwise it is `INFO`.
//!
//! ```sh
//! export YELP_DASHBOARD_DEBUG=true
//! ```

use tracing::Level;

pub const DEBUG_ENV_VAR: &str = "YELP_DASHBOARD_DEBUG";

fn debug_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| !(v.is_empty() || v == "0" || v == "false"))
}

/// Pick the maximum log level from the CLI flag and the environment.
pub fn log_level(verbose: bool) -> Level {
    let env_value = std::env::var(DEBUG_ENV_VAR).ok();
    if verbose || debug_requested(env_value.as_deref()) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

pub fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_target(false)
        .init();
}
