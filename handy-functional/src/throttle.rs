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

/// Wraps `func` so that it runs at most once per `delay` window.
///
/// This implements **trailing throttle** semantics:
/// - The first call opens a window and schedules a firing `delay` later
/// - Calls inside an open window only replace the captured arguments
/// - The firing uses the arguments of the latest call, then closes the window
/// - The next call after that opens a new window
///
/// Nothing runs on the leading edge. Calls return immediately.
///
/// # Example
///
/// ```rust,no_run
/// use handy_functional::throttle;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let report = throttle(|position: u32| println!("scrolled to {position}"), Duration::from_millis(100));
///
/// for position in 0..50 {
///     report.call(position);
/// }
///
/// tokio::time::sleep(Duration::from_millis(150)).await; // prints "scrolled to 49"
/// # }
/// ```
pub fn throttle<A, F>(func: F, delay: Duration) -> Throttled<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Throttled::new(func, delay)
}

/// Like [`throttle`], measuring the window with an explicit timer.
pub fn throttle_with_timer<A, F>(
    func: F,
    delay: Duration,
    timer: <DefaultRuntime as Runtime>::Timer,
) -> Throttled<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Throttled::with_timer(func, delay, timer)
}

/// Arguments captured while a window is open.
struct Window<A> {
    latest: Option<A>,
    open: bool,
}

/// A throttled wrapper around a callback.
///
/// Clones share one window; separately constructed wrappers never do. Dropping
/// the last clone cancels a pending firing.
pub struct Throttled<A: Send, R: Runtime = DefaultRuntime> {
    func: Arc<dyn Fn(A) + Send + Sync>,
    delay: Duration,
    timer: R::Timer,
    window: R::Mutex<Window<A>>,
    task: R::Mutex<Option<ScheduledTask>>,
}

impl<A, R> Throttled<A, R>
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
            window: R::Mutex::new(Window {
                latest: None,
                open: false,
            }),
            task: R::Mutex::new(None),
        }
    }

    /// Capture `args`; open a window if none is pending.
    ///
    /// # Panics
    /// On the Tokio runtime, panics when called outside a Tokio runtime context,
    /// since the firing is scheduled on the Tokio timer and spawned with `tokio::spawn`.
    pub fn call(&self, args: A) {
        let mut window = self.window.lock();
        window.latest = Some(args);

        if window.open {
            return;
        }
        window.open = true;

        let func = Arc::clone(&self.func);
        let shared = self.window.clone();
        let sleep = self.timer.sleep_future(self.delay);

        // The previous handle, if any, belongs to a window that already fired.
        *self.task.lock() = Some(ScheduledTask::spawn::<R, _, _>(move |cancel| async move {
            if cancel.run_until_cancelled(sleep).await.is_none() {
                debug!("throttled call dropped with its wrapper");
                return;
            }

            let latest = {
                let mut window = shared.lock();
                window.open = false;
                window.latest.take()
            };

            if let Some(args) = latest {
                func(args);
            }
        }));
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A: Send, R: Runtime> Clone for Throttled<A, R> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            delay: self.delay,
            timer: self.timer.clone(),
            window: self.window.clone(),
            task: self.task.clone(),
        }
    }
}

impl<A: Send, R: Runtime> fmt::Debug for Throttled<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("delay", &self.delay)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
