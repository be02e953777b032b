// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Helpers that lean on the host environment.
//!
//! Host capabilities (the clipboard, a scrollable viewport, network and
//! accessibility status) are passed in as trait objects, so the helpers work
//! against a browser bridge, a native toolkit or a test double alike.
//!
//! - [`uuid`] - random v4 identifier
//! - [`SearchParams`] - query-string lookup
//! - [`copy_to_clipboard`] - modern clipboard with a legacy fallback
//! - [`is_scrolled_to_bottom`], [`animate_scroll_to`] - scrolling
//! - [`is_online`], [`prefers_reduced_motion`] - host status

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("handy-platform needs the `runtime-tokio` or `runtime-smol` feature");

#[macro_use]
mod logging;

pub mod clipboard;
pub mod environment;
pub mod identifier;
pub mod scroll;
pub mod search_params;

pub use clipboard::{copy_to_clipboard, Clipboard, HostError, LegacyClipboard};
pub use environment::{is_online, prefers_reduced_motion, MotionPreference, NetworkStatus};
pub use identifier::uuid;
pub use scroll::{
    animate_scroll_to, animate_scroll_to_with_timer, is_scrolled_to_bottom, ScrollMetrics,
    ScrollTarget, DEFAULT_SCROLL_DURATION,
};
pub use search_params::SearchParams;
