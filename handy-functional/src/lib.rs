// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Temporal control-flow helpers.
//!
//! # Overview
//!
//! - **[`debounce`]** - delay a call until calls stop arriving for a quiet period
//! - **[`throttle`]** - run at most once per interval, trailing edge, last call wins
//! - **[`retry`]** - re-attempt a failing async operation with exponential backoff
//! - **[`settle_all`]** - wait for every operation, collecting each outcome in order
//!
//! The four helpers are independent. Debounce and throttle schedule their deferred
//! work on the runtime selected through cargo features (`runtime-tokio` by
//! default, `runtime-smol`); retry sleeps through the same runtime's timer.
//!
//! # Example
//!
//! ```rust,no_run
//! use handy_functional::{debounce, retry};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let save = debounce(|text: String| println!("saving {text}"), Duration::from_millis(300));
//! save.call("h".to_string());
//! save.call("he".to_string()); // only "he" is saved
//!
//! let body: Result<&str, &str> = retry(|| async { Ok("pong") }, 3, Duration::from_millis(100)).await;
//! assert_eq!(body, Ok("pong"));
//! # }
//! ```

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("handy-functional needs the `runtime-tokio` or `runtime-smol` feature");

#[macro_use]
mod logging;

pub mod debounce;
pub mod retry;
pub mod settle;
pub mod throttle;

pub mod prelude;

pub use debounce::{debounce, debounce_with_timer, Debounced};
pub use retry::{retry, retry_with_timer, RetryPolicy, DEFAULT_RETRY_DELAY};
pub use settle::{settle_all, Settled};
pub use throttle::{throttle, throttle_with_timer, Throttled};
