//! # Client Configuration Module
//!
//! Environment variable-based configuration for the Pet Store client.
//!
//! ## Environment Variables
//!
//! ### `PETSTORE_BASE_URL`
//!
//! Base URL of the service under test. Default:
//! `https://petstore.swagger.io/v2`. Point this at a local mock to run the
//! suite hermetically.
//!
//! ### `PETSTORE_TIMEOUT_MS`
//!
//! HTTP request timeout in milliseconds. Default: `5000`.
//!
//! ### `PETSTORE_LATENCY_BUDGET_MS`
//!
//! Per-call latency budget in milliseconds. Calls are expected to complete
//! within this window; the budget is surfaced via
//! [`PetStoreClient::latency_budget`](crate::client::PetStoreClient::latency_budget)
//! for test assertions. Default: `1000`.
//!
//! Malformed values fall back to the defaults rather than failing startup.

use std::env;

/// Default base URL of the public Pet Store API.
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// Configuration for [`PetStoreClient`](crate::client::PetStoreClient),
/// loaded from environment variables with [`ClientConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service under test.
    pub base_url: String,
    /// HTTP request timeout in milliseconds (default: 5000).
    pub timeout_ms: u64,
    /// Per-call latency budget in milliseconds (default: 1000).
    pub latency_budget_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: 5000,
            latency_budget_ms: 1000,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("PETSTORE_BASE_URL").unwrap_or(defaults.base_url),
            timeout_ms: env_u64("PETSTORE_TIMEOUT_MS", defaults.timeout_ms),
            latency_budget_ms: env_u64("PETSTORE_LATENCY_BUDGET_MS", defaults.latency_budget_ms),
        }
    }

    /// Override the base URL, keeping other settings.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(val) => val.parse().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.latency_budget_ms, 1000);
    }

    #[test]
    fn test_with_base_url() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn test_env_u64_fallback_on_garbage() {
        assert_eq!(env_u64("PETSTORE_NO_SUCH_VAR", 42), 42);
    }
}
