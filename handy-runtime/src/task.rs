// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Detached background work with cooperative cancellation.

use crate::runtime::Runtime;
use crate::CancellationToken;
use core::future::Future;

/// Handle to a spawned background task, cancelled on drop.
///
/// The spawned future receives a [`CancellationToken`] and is expected to stop
/// at its next checkpoint once the token fires. Dropping or cancelling the
/// handle signals the token; it does not wait for the task to finish.
///
/// # Example
///
/// ```rust
/// use handy_runtime::{ScheduledTask, TokioRuntime};
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = ScheduledTask::spawn::<TokioRuntime, _, _>(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
pub struct ScheduledTask {
    cancel: CancellationToken,
}

impl ScheduledTask {
    /// Spawn a background task on runtime `R`.
    pub fn spawn<R, F, Fut>(f: F) -> Self
    where
        R: Runtime,
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        R::spawn(f(cancel.clone()));

        Self { cancel }
    }

    /// Signal the task to stop. Does not wait for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
