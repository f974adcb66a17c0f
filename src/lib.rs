//! Bounded-retry layer for a chat relay's upstream directory queries.

pub mod config;
pub mod observability;
pub mod retry;
pub mod upstream;

pub use config::schema::RelayConfig;
pub use retry::cancel::CancelToken;
pub use retry::invoker::{retry_with_backoff, retry_with_backoff_until, RetryError};
pub use upstream::client::DirectoryClient;
