//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "SHOP_LOG";

/// Filter directive: `--verbose` raises the level to `debug`.
fn directive(config: &LoggingConfig, verbose: bool) -> &str {
    if verbose {
        "debug"
    } else {
        &config.level
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for
/// command output.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(directive(config, verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
