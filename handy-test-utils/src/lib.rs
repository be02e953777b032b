// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the handy workspace.
//!
//! Development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `CallRecorder<A>`
//!
//! Hands out callbacks that record every argument they receive, so tests can
//! assert how often and with what a debounced or throttled wrapper fired:
//!
//! ```rust
//! use handy_test_utils::CallRecorder;
//!
//! let recorder = CallRecorder::new();
//! let callback = recorder.callback();
//!
//! callback("first");
//! callback("second");
//!
//! assert_eq!(recorder.calls(), vec!["first", "second"]);
//! ```
//!
//! ## `FlakyOperation`
//!
//! An async operation that fails a configured number of times, counting the
//! attempts and recording when each happened:
//!
//! ```rust
//! use handy_test_utils::FlakyOperation;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let operation = FlakyOperation::succeed_after(1);
//!
//! assert!(operation.attempt().await.is_err());
//! assert_eq!(operation.attempt().await, Ok(2));
//! # }
//! ```
//!
//! ## Fixtures
//!
//! - `Person` - a serde-enabled record with name, age and city
//! - `person_alice()`, `person_bob()`, ... - predefined people

pub mod flaky;
pub mod helpers;
pub mod person;
pub mod recorder;
pub mod test_data;

pub use flaky::{FlakyOperation, TestError};
pub use person::Person;
pub use recorder::CallRecorder;
