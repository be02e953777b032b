// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::debounce::{debounce, Debounced};
pub use crate::retry::{retry, RetryPolicy};
pub use crate::settle::{settle_all, Settled};
pub use crate::throttle::{throttle, Throttled};
