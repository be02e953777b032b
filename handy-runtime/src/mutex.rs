// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Shared, cloneable mutex handle. Clones lock the same value.
pub trait MutexLike<T: ?Sized>: Clone {
    /// The guard type returned by `lock()`
    type Guard<'a>: Deref<Target = T> + DerefMut
    where
        Self: 'a,
        T: 'a;

    /// Create a new mutex wrapping the given value
    fn new(value: T) -> Self
    where
        T: Sized;

    /// Lock the mutex and return a guard
    fn lock(&self) -> Self::Guard<'_>;
}

impl<T: ?Sized> MutexLike<T> for Arc<parking_lot::Mutex<T>> {
    type Guard<'a>
        = parking_lot::MutexGuard<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn new(value: T) -> Self
    where
        T: Sized,
    {
        Arc::new(parking_lot::Mutex::new(value))
    }

    fn lock(&self) -> Self::Guard<'_> {
        self.as_ref().lock()
    }
}
