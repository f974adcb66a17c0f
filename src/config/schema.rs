//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the upstream
//! layer. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the upstream layer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Upstream user-directory settings.
    pub upstream: UpstreamConfig,

    /// Retry behavior for upstream queries.
    pub retries: RetryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Upstream user-directory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the directory service (e.g., "https://chat.example.com").
    pub base_url: String,

    /// API key sent as a Bearer token. Empty disables the header.
    pub api_key: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3030".to_string(),
            api_key: String::new(),
            request_timeout_secs: 10,
        }
    }
}

/// Retry configuration for upstream queries.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of re-attempts after the first failure.
    /// Zero means a single attempt.
    pub max_retries: u32,

    /// Delay before the first re-attempt in milliseconds. Doubles after every
    /// failed attempt, with no upper bound.
    pub initial_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 1000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
