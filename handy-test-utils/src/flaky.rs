// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Failure injection for async operations.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::time::Instant;

/// Error produced by [`FlakyOperation`], tagged with the failing attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("attempt {attempt} failed")]
pub struct TestError {
    pub attempt: usize,
}

/// An async operation that fails a fixed number of times before succeeding.
///
/// Successful attempts resolve to the 1-based attempt number. Clones share the
/// attempt log, so a clone can be moved into a retry closure while the original
/// is inspected afterwards.
#[derive(Debug, Clone)]
pub struct FlakyOperation {
    failures: Option<usize>,
    attempts: Arc<Mutex<Vec<Instant>>>,
}

impl FlakyOperation {
    /// Fails on every attempt.
    #[must_use]
    pub fn always_failing() -> Self {
        Self {
            failures: None,
            attempts: Arc::default(),
        }
    }

    /// Fails `failures` times, then succeeds on every later attempt.
    #[must_use]
    pub fn succeed_after(failures: usize) -> Self {
        Self {
            failures: Some(failures),
            attempts: Arc::default(),
        }
    }

    /// Run one attempt.
    ///
    /// # Errors
    /// Returns `TestError` while the configured failures are not used up.
    pub async fn attempt(&self) -> Result<usize, TestError> {
        let attempt = {
            let mut attempts = self.attempts.lock();
            attempts.push(Instant::now());
            attempts.len()
        };

        match self.failures {
            Some(failures) if attempt > failures => Ok(attempt),
            _ => Err(TestError { attempt }),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.lock().len()
    }

    /// Instants at which each attempt started, in order.
    pub fn attempt_times(&self) -> Vec<Instant> {
        self.attempts.lock().clone()
    }
}
