//! Concrete key result type

use crate::{KeyError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use zeroize::Zeroizing;

type StretchedKey = Zeroizing<Vec<u8>>;

/// Pending stretched key
pub struct KeyResult {
    receiver: oneshot::Receiver<Result<StretchedKey>>,
}

impl KeyResult {
    /// Create a new `KeyResult` from a oneshot receiver
    pub(crate) fn new(receiver: oneshot::Receiver<Result<StretchedKey>>) -> Self {
        Self { receiver }
    }

    /// Create a `KeyResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<StretchedKey>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }
}

impl Future for KeyResult {
    type Output = Result<StretchedKey>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(KeyError::internal("Key stretch task dropped"))),
            Poll::Pending => Poll::Pending,
        }
    }
}
