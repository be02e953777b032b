// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::time::Duration;
use handy_runtime::mutex::MutexLike;
use handy_runtime::runtime::Runtime;
use handy_runtime::timer::Timer;
use handy_runtime::{DefaultRuntime, ScheduledTask};
use std::sync::Arc;

/// Wraps `func` so that it only runs once calls stop arriving for `delay`.
///
/// This implements **trailing debounce** semantics:
/// - Every [`call`](Debounced::call) cancels the pending firing, if any, and
///   schedules a new one `delay` from now
/// - The firing uses the arguments of the latest call
/// - Calls arriving faster than `delay` postpone the firing indefinitely
///
/// Calls return immediately; `func` runs later on a spawned task and its
/// result is not observable by the caller. A zero `delay` fires on the next
/// scheduler tick.
///
/// Multiple arguments are passed as a tuple.
///
/// # Example
///
/// ```rust,no_run
/// use handy_functional::debounce;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let search = debounce(|query: String| println!("searching {query}"), Duration::from_millis(250));
///
/// for prefix in ["r", "ru", "rus", "rust"] {
///     search.call(prefix.to_string());
/// }
///
/// tokio::time::sleep(Duration::from_millis(300)).await; // prints "searching rust" once
/// # }
/// ```
pub fn debounce<A, F>(func: F, delay: Duration) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced::new(func, delay)
}

/// Like [`debounce`], measuring the quiet period with an explicit timer.
pub fn debounce_with_timer<A, F>(
    func: F,
    delay: Duration,
    timer: <DefaultRuntime as Runtime>::Timer,
) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced::with_timer(func, delay, timer)
}

/// A debounced wrapper around a callback.
///
/// Clones share the same pending state; every wrapper built by [`debounce`] or
/// [`Debounced::new`] has its own. Dropping the last clone cancels a pending
/// firing.
pub struct Debounced<A, R: Runtime = DefaultRuntime> {
    func: Arc<dyn Fn(A) + Send + Sync>,
    delay: Duration,
    timer: R::Timer,
    pending: R::Mutex<Option<ScheduledTask>>,
}

impl<A, R> Debounced<A, R>
where
    A: Send + 'static,
    R: Runtime,
{
    pub fn new<F>(func: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_timer(func, delay, R::Timer::default())
    }

    pub fn with_timer<F>(func: F, delay: Duration, timer: R::Timer) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            delay,
            timer,
            pending: R::Mutex::new(None),
        }
    }

    /// Schedule `func(args)` after the quiet period, superseding any pending call.
    ///
    /// # Panics
    /// On the Tokio runtime, panics when called outside a Tokio runtime context,
    /// since the firing is scheduled on the Tokio timer and spawned with `tokio::spawn`.
    pub fn call(&self, args: A) {
        let mut pending = self.pending.lock();

        if let Some(previous) = pending.take() {
            previous.cancel();
        }

        let func = Arc::clone(&self.func);
        let sleep = self.timer.sleep_future(self.delay);

        *pending = Some(ScheduledTask::spawn::<R, _, _>(move |cancel| async move {
            match cancel.run_until_cancelled(sleep).await {
                Some(()) => func(args),
                None => debug!("debounced call superseded before firing"),
            }
        }));
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A, R: Runtime> Clone for Debounced<A, R> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            delay: self.delay,
            timer: self.timer.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<A, R: Runtime> fmt::Debug for Debounced<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
