//! Directory-specific types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export UpstreamConfig from config module to avoid duplication
pub use crate::config::schema::UpstreamConfig;

/// Filter for a user-directory query.
///
/// An empty filter matches every user; `id` narrows the query to one entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserQuery {
    /// Exact user id to match, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl UserQuery {
    /// Query for a single user by id.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// One user as the directory reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Directory-wide unique id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email, if the directory stores one.
    #[serde(default)]
    pub email: Option<String>,

    /// Directory role (e.g., "user").
    #[serde(default)]
    pub role: Option<String>,
}

/// Response payload of a user-directory query.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryUsersResponse {
    /// Users matching the filter, possibly empty.
    pub users: Vec<UserRecord>,
}

/// Errors that can occur talking to the user directory.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Request could not be sent or the connection failed mid-flight.
    #[error("request error: {0}")]
    Request(String),

    /// The call exceeded the configured deadline.
    #[error("directory request timed out after {0} seconds")]
    Timeout(u64),

    /// The directory answered with a non-success status.
    #[error("directory returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected shape.
    #[error("invalid directory response: {0}")]
    Decode(String),

    /// The configured base URL is not usable.
    #[error("invalid directory base URL '{0}'")]
    BaseUrl(String),
}

/// Result type for directory operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
