// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the handy utility library.
//!
//! The temporal helpers (debounce, throttle, retry) never talk to an executor
//! directly. They go through the [`Runtime`](runtime::Runtime) trait, which bundles
//! a [`Timer`](timer::Timer), a mutex flavour and a spawner, so the same code runs
//! on Tokio (`runtime-tokio`, default) or smol (`runtime-smol`).

pub mod cancellation_token;
pub mod impls;
pub mod mutex;
pub mod runtime;
pub mod task;
pub mod timer;

pub use cancellation_token::CancellationToken;
pub use task::ScheduledTask;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::{TokioRuntime, TokioTimer};

#[cfg(feature = "runtime-smol")]
pub use impls::smol::{SmolRuntime, SmolTimer};

/// Runtime used by the convenience constructors when no runtime is named.
#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = impls::tokio::TokioRuntime;

/// Runtime used by the convenience constructors when no runtime is named.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultRuntime = impls::smol::SmolRuntime;
