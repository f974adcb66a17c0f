//! Cancellation handle for in-flight retry sequences.
//!
//! A caller stuck behind a long backoff has no other way to give up early;
//! any clone of the token can flip it and wake the sequence out of its wait.

use std::sync::Arc;

use tokio::sync::watch;

/// Clonable handle that aborts a retry sequence.
///
/// Built on a watch channel rather than broadcast so a token cancelled
/// before the sequence starts waiting is still observed.
#[derive(Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    /// Create a new, un-cancelled token.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Flip the token. Every clone observes the cancellation.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolve once the token is cancelled.
    ///
    /// Resolves immediately if it already was. The sender lives in `self`,
    /// so the channel cannot close while a waiter is parked here.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
