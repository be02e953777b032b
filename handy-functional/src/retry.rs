// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::time::Duration;
use handy_runtime::runtime::Runtime;
use handy_runtime::timer::Timer;
use handy_runtime::DefaultRuntime;

/// Wait before the first retry when no delay is given.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// How often and how patiently to re-attempt a failing operation.
///
/// The wait before retry `n` (1-based) is `initial_delay * 2^(n-1)`, saturating
/// at `Duration::MAX`. Total attempts are `retries + 1`.
///
/// # Example
///
/// ```
/// use handy_functional::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(3).with_initial_delay(Duration::from_millis(50));
/// let waits: Vec<_> = policy.delays().collect();
///
/// assert_eq!(
///     waits,
///     vec![
///         Duration::from_millis(50),
///         Duration::from_millis(100),
///         Duration::from_millis(200),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 0,
            initial_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub const fn new(retries: u32) -> Self {
        Self {
            retries,
            initial_delay: DEFAULT_RETRY_DELAY,
        }
    }

    #[must_use]
    pub const fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    /// The waits between consecutive attempts, in order.
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        core::iter::successors(Some(self.initial_delay), |delay| {
            Some(delay.saturating_mul(2))
        })
        .take(self.retries as usize)
    }

    /// Run `operation` under this policy on the default runtime's timer.
    ///
    /// # Errors
    /// Returns the error of the last attempt, unchanged, once retries run out.
    pub async fn run<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let timer = <DefaultRuntime as Runtime>::Timer::default();
        self.run_with_timer(operation, &timer).await
    }

    /// Run `operation` under this policy, sleeping on `timer` between attempts.
    ///
    /// # Errors
    /// Returns the error of the last attempt, unchanged, once retries run out.
    pub async fn run_with_timer<F, Fut, T, E, TM>(
        &self,
        mut operation: F,
        timer: &TM,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        TM: Timer,
    {
        let mut remaining = self.retries;
        let mut delay = self.initial_delay;
        let mut attempt: u32 = 1;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(error) if remaining == 0 => {
                    if attempt > 1 {
                        warn!("giving up after {attempt} attempts");
                    }
                    return Err(error);
                }
                Err(_) => {
                    debug!("attempt {attempt} failed, retrying in {delay:?}");
                    timer.sleep_future(delay).await;
                    delay = delay.saturating_mul(2);
                    remaining -= 1;
                    attempt += 1;
                }
            }
        }
    }
}

/// Re-attempt `operation` up to `retries` times with exponential backoff.
///
/// The first attempt runs immediately. After each failure, while retries
/// remain, it waits `delay`, then `2 * delay`, `4 * delay` and so on. A success
/// is returned as soon as it happens. When the last attempt fails its error is
/// returned as-is, never wrapped.
///
/// # Errors
/// Returns the last attempt's error when all `retries + 1` attempts fail.
///
/// # Example
///
/// ```rust
/// use handy_functional::retry;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let calls = &AtomicU32::new(0);
///
/// let result = retry(
///     move || async move {
///         if calls.fetch_add(1, Ordering::SeqCst) == 0 {
///             Err("connection reset")
///         } else {
///             Ok(200)
///         }
///     },
///     3,
///     Duration::from_millis(10),
/// )
/// .await;
///
/// assert_eq!(result, Ok(200));
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// # }
/// ```
pub async fn retry<F, Fut, T, E>(operation: F, retries: u32, delay: Duration) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    RetryPolicy::new(retries)
        .with_initial_delay(delay)
        .run(operation)
        .await
}

/// Like [`retry`], sleeping on an explicit timer.
///
/// # Errors
/// Returns the last attempt's error when all `retries + 1` attempts fail.
pub async fn retry_with_timer<F, Fut, T, E, TM>(
    operation: F,
    retries: u32,
    delay: Duration,
    timer: &TM,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    TM: Timer,
{
    RetryPolicy::new(retries)
        .with_initial_delay(delay)
        .run_with_timer(operation, timer)
        .await
}
