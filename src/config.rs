use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REST_TIMEOUT_SECS,
    DEFAULT_USER_IDENTIFIER,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the REST API
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct RestApiConfig {
    /// Base URL of the CryptoSim backend, without the `/api` prefix
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

/// Configuration for the background price poll
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct PollingConfig {
    /// Seconds between price refreshes
    pub interval_secs: u64,
}

/// Main configuration for the CryptoSim client
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Identifier of the account this session operates on.
    ///
    /// The backend keys every account-scoped endpoint on it; there is no
    /// login step.
    pub user_identifier: String,
    /// Background polling configuration
    pub polling: PollingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds a configuration from the environment.
    ///
    /// A `.env` file is loaded first if present; every value falls back to a
    /// sensible default so the client can run against a local backend with no
    /// setup at all.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Loaded .env file"),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "CRYPTOSIM_REST_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("CRYPTOSIM_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
            user_identifier: get_env_or_default(
                "CRYPTOSIM_USER",
                String::from(DEFAULT_USER_IDENTIFIER),
            ),
            polling: PollingConfig {
                interval_secs: get_env_or_default(
                    "CRYPTOSIM_POLL_INTERVAL_SECS",
                    DEFAULT_POLL_INTERVAL_SECS,
                ),
            },
        }
    }

    /// Builds a configuration pointing at an explicit base URL, keeping
    /// defaults for everything else. Mostly useful in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REST_TIMEOUT_SECS,
            },
            user_identifier: String::from(DEFAULT_USER_IDENTIFIER),
            polling: PollingConfig {
                interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            },
        }
    }
}
