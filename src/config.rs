//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PROBE_TIMEOUT_SECS` - Timeout of the image link probe in seconds
//!   (default: unset, the probe waits as long as the connection stays open)
//! - `PROBE_USER_AGENT` - `User-Agent` sent by the image link probe
//!   (default: `pitch-form/<version>`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Request timeout for the image link probe. `None` disables the timeout.
    pub probe_timeout_seconds: Option<u64>,
    pub probe_user_agent: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PROBE_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let probe_timeout_seconds: Option<u64> = match env::var("PROBE_TIMEOUT_SECS") {
            Ok(v) if !v.trim().is_empty() => Some(
                v.trim()
                    .parse()
                    .with_context(|| format!("PROBE_TIMEOUT_SECS must be a number, got '{v}'"))?,
            ),
            _ => None,
        };

        let probe_user_agent = env::var("PROBE_USER_AGENT")
            .unwrap_or_else(|_| format!("pitch-form/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            probe_timeout_seconds,
            probe_user_agent,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `probe_timeout_seconds` is zero
    /// - `probe_user_agent` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.probe_timeout_seconds == Some(0) {
            anyhow::bail!("PROBE_TIMEOUT_SECS must be greater than 0");
        }

        if self.probe_user_agent.trim().is_empty() {
            anyhow::bail!("PROBE_USER_AGENT must not be empty");
        }

        Ok(())
    }

    /// Timeout for the image link probe, if one is configured.
    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_seconds.map(Duration::from_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        match self.probe_timeout_seconds {
            Some(secs) => tracing::info!("  Image probe timeout: {}s", secs),
            None => tracing::info!("  Image probe timeout: none"),
        }
        tracing::info!("  Image probe user agent: {}", self.probe_user_agent);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
