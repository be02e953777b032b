// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::future::Future;
use std::{sync::Arc, time::Duration};

use crate::{runtime::Runtime, timer::Timer};

#[derive(Debug)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    type Mutex<T: ?Sized + Send> = Arc<parking_lot::Mutex<T>>;
    type Timer = TokioTimer;
    type Instant = tokio::time::Instant;

    fn spawn<F>(future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(future);
    }
}

/// Timer backed by `tokio::time`, so paused test clocks drive it too.
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}
