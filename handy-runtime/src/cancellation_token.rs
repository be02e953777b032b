// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic cancellation token.

use core::future::Future;
use core::pin::{pin, Pin};
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use futures::future::{select, Either};
use std::sync::Arc;

/// Runtime-agnostic cancellation token.
///
/// Clones share the same cancellation state. When `cancel()` is called on any
/// clone, every waiter on `cancelled()` is woken.
///
/// # Example
///
/// ```
/// use handy_runtime::CancellationToken;
///
/// let token = CancellationToken::new();
/// let token_clone = token.clone();
///
/// token.cancel();
/// assert!(token_clone.is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    cancelled: AtomicBool,
    event: Event,
}

impl CancellationToken {
    /// Create a new, not yet cancelled token.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Cancel the token, waking all listeners. Idempotent.
    pub fn cancel(&self) {
        // Flag before notify so woken waiters observe it
        self.inner.cancelled.store(true, Ordering::Release);
        self.inner.event.notify(usize::MAX);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Wait asynchronously until the token is cancelled.
    ///
    /// Resolves immediately if the token is already cancelled.
    pub fn cancelled(&self) -> Cancelled<'_> {
        Cancelled {
            token: self,
            listener: None,
        }
    }

    /// Drive `future` to completion unless the token is cancelled first.
    ///
    /// Returns `None` when cancellation wins. A future that completes in the
    /// same poll as a cancellation also yields `None`: once cancelled, no output
    /// is handed back.
    pub async fn run_until_cancelled<F: Future>(&self, future: F) -> Option<F::Output> {
        let future = pin!(future);
        let cancelled = pin!(self.cancelled());

        match select(future, cancelled).await {
            Either::Left((output, _)) if !self.is_cancelled() => Some(output),
            _ => None,
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`CancellationToken::cancelled()`].
pub struct Cancelled<'a> {
    token: &'a CancellationToken,
    listener: Option<EventListener>,
}

impl Future for Cancelled<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.token.is_cancelled() {
            return Poll::Ready(());
        }

        if self.listener.is_none() {
            self.listener = Some(self.token.inner.event.listen());

            // cancel() may have run between the check above and listen()
            if self.token.is_cancelled() {
                return Poll::Ready(());
            }
        }

        match self.listener.as_mut() {
            Some(listener) => Pin::new(listener).poll(cx),
            None => Poll::Pending,
        }
    }
}
