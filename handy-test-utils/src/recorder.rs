// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Records the arguments of every invocation of the callbacks it hands out.
#[derive(Debug)]
pub struct CallRecorder<A> {
    calls: Arc<Mutex<Vec<A>>>,
}

impl<A> CallRecorder<A>
where
    A: Clone + Send + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback that appends its argument to this recorder.
    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |args| calls.lock().push(args)
    }

    /// Snapshot of the recorded arguments, in call order.
    pub fn calls(&self) -> Vec<A> {
        self.calls.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last(&self) -> Option<A> {
        self.calls.lock().last().cloned()
    }
}

impl<A> Clone for CallRecorder<A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<A> Default for CallRecorder<A>
where
    A: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
