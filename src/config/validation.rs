//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (delays and timeouts are nonzero)
//! - Check the upstream base URL is well formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::RelayConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `retries.initial_delay_ms` must be greater than zero.
    ZeroInitialDelay,
    /// `upstream.request_timeout_secs` must be greater than zero.
    ZeroRequestTimeout,
    /// `upstream.base_url` could not be parsed as a URL.
    InvalidBaseUrl(String),
    /// `observability.log_level` is not a recognized level.
    UnknownLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ZeroInitialDelay => {
                write!(f, "retries.initial_delay_ms must be greater than zero")
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "upstream.request_timeout_secs must be greater than zero")
            }
            ValidationError::InvalidBaseUrl(url) => {
                write!(f, "upstream.base_url '{}' is not a valid URL", url)
            }
            ValidationError::UnknownLogLevel(level) => {
                write!(
                    f,
                    "observability.log_level '{}' is not one of trace, debug, info, warn, error",
                    level
                )
            }
        }
    }
}

/// Validate semantic constraints on a parsed configuration.
///
/// Collects every violation instead of stopping at the first.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.retries.initial_delay_ms == 0 {
        errors.push(ValidationError::ZeroInitialDelay);
    }

    if config.upstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if url::Url::parse(&config.upstream.base_url).is_err() {
        errors.push(ValidationError::InvalidBaseUrl(
            config.upstream.base_url.clone(),
        ));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
