//! Configuration management for the demo binary.
//!
//! Loads configuration from environment variables with defaults that work
//! with no environment at all. A `.env` file is honored when present.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for the file-backed store; `None` keeps state in memory
    pub data_dir: Option<PathBuf>,
    /// Simulated latency of the mock auth collaborator
    pub auth_latency: Duration,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Recognized variables:
    /// - `EVENTHUB_DATA_DIR`: persist state under this directory
    /// - `EVENTHUB_AUTH_LATENCY_MS`: mock auth latency (default 800)
    ///
    /// The content-generation credential (`ANTHROPIC_API_KEY`) is read by
    /// the content service itself.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("EVENTHUB_DATA_DIR").ok().map(PathBuf::from);

        let auth_latency = env::var("EVENTHUB_AUTH_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map_or(
                eventhub_auth::MockAuthService::DEFAULT_LATENCY,
                Duration::from_millis,
            );

        Self {
            data_dir,
            auth_latency,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            auth_latency: eventhub_auth::MockAuthService::DEFAULT_LATENCY,
        }
    }
}
