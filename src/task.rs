//! Async task helpers.
//!
//! Provides:
//! - [`timeout`] for sleeping a number of milliseconds
//! - [`defer`] for splitting a future from the handle that settles it

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::sync::oneshot;

use crate::error::{Error, Result};

/// Delay used by [`timeout`] callers that have no preference.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Resolve after `ms` milliseconds.
pub async fn timeout(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Settling half of [`defer`].
#[derive(Debug)]
pub struct Deferred<T> {
    sender: oneshot::Sender<Result<T>>,
}

impl<T> Deferred<T> {
    /// Settle the paired [`Deferral`] with a value.
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    /// Settle the paired [`Deferral`] with an error.
    pub fn reject(self, err: Error) {
        self.settle(Err(err));
    }

    fn settle(self, outcome: Result<T>) {
        if self.sender.send(outcome).is_err() {
            tracing::debug!("Deferral dropped before it was settled");
        }
    }
}

/// Awaitable half of [`defer`].
///
/// Yields [`Error::Deferred`] if the [`Deferred`] handle is dropped without
/// being settled.
#[derive(Debug)]
pub struct Deferral<T> {
    receiver: oneshot::Receiver<Result<T>>,
}

impl<T> Future for Deferral<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|outcome| outcome.unwrap_or(Err(Error::Deferred)))
    }
}

/// Create a settle handle and the future it completes.
pub fn defer<T>() -> (Deferred<T>, Deferral<T>) {
    let (sender, receiver) = oneshot::channel();
    (Deferred { sender }, Deferral { receiver })
}
