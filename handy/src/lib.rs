// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Handy
//!
//! Small everyday helpers for application code.
//!
//! ## Overview
//!
//! - **Temporal control flow** ([`handy_functional`]): [`debounce`], [`throttle`],
//!   [`retry`] with exponential backoff and [`settle_all`]
//! - **Pure helpers** ([`handy_core`]): arrays, dates, numbers, JSON objects,
//!   strings, validation and user-facing HTTP error messages
//! - **Host-backed helpers** ([`handy_platform`]): identifiers, query strings,
//!   clipboard copy with fallback, scrolling, network and motion preferences
//!
//! Debounce, throttle and the scroll animation run on the runtime picked through
//! cargo features: `runtime-tokio` (default) or `runtime-smol`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use handy::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let search = debounce(
//!         |query: String| println!("searching {}", to_kebab_case(&query)),
//!         Duration::from_millis(250),
//!     );
//!     search.call("helloWorld".to_string());
//!
//!     let outcomes = settle_all((1..=2).map(|id| {
//!         retry(
//!             move || async move { if id == 1 { Ok(id) } else { Err("offline") } },
//!             2,
//!             Duration::from_millis(100),
//!         )
//!     }))
//!     .await;
//!     assert_eq!(outcomes, vec![Settled::Fulfilled(1), Settled::Rejected("offline")]);
//! }
//! ```

pub use handy_core;
pub use handy_error;
pub use handy_functional;
pub use handy_platform;
pub use handy_runtime;

// Errors
pub use handy_error::{HandyError, Result};

// Temporal helpers
pub use handy_functional::{
    debounce, debounce_with_timer, retry, retry_with_timer, settle_all, throttle,
    throttle_with_timer, Debounced, RetryPolicy, Settled, Throttled, DEFAULT_RETRY_DELAY,
};

// Pure helpers
pub use handy_core::{
    capitalize, deep_clone, deep_equal, format_currency, format_date, get_prop, get_prop_or,
    group_by, is_email, is_empty_object, is_http_client_error, is_number, is_password_strong,
    is_valid_url, parse_http_error, password_strength, shuffle, shuffle_with, time_ago,
    time_ago_from, to_kebab_case, truncate, truncate_with, unique, HttpClientError,
    HttpErrorInfo, HttpResponseInfo, PasswordStrength,
};

// Host-backed helpers
pub use handy_platform::{
    animate_scroll_to, animate_scroll_to_with_timer, copy_to_clipboard, is_online,
    is_scrolled_to_bottom, prefers_reduced_motion, uuid, Clipboard, HostError, LegacyClipboard,
    MotionPreference, NetworkStatus, ScrollMetrics, ScrollTarget, SearchParams,
    DEFAULT_SCROLL_DURATION,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use handy_core::{
        capitalize, deep_equal, format_currency, get_prop, is_email, to_kebab_case, truncate,
    };
    pub use handy_error::HandyError;
    pub use handy_functional::prelude::*;
    pub use handy_platform::{copy_to_clipboard, uuid, SearchParams};
}
