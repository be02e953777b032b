// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pure, stateless helpers.
//!
//! | module         | helpers                                                          |
//! |----------------|------------------------------------------------------------------|
//! | [`array`]      | `group_by`, `shuffle`, `unique`                                  |
//! | [`date`]       | `format_date`, `time_ago`                                        |
//! | [`number`]     | `format_currency`, `is_number`                                   |
//! | [`object`]     | `deep_clone`, `deep_equal`, `get_prop`, `is_empty_object`        |
//! | [`string`]     | `capitalize`, `to_kebab_case`, `truncate`                        |
//! | [`validation`] | `is_email`, `is_valid_url`, `is_password_strong`                 |
//! | [`http_error`] | `is_http_client_error`, `parse_http_error`                       |
//!
//! Dynamic values (the object helpers, error shapes) are `serde_json::Value`.

pub mod array;
pub mod date;
pub mod http_error;
pub mod number;
pub mod object;
pub mod string;
pub mod validation;

pub use array::{group_by, shuffle, shuffle_with, unique};
pub use date::{format_date, time_ago, time_ago_from};
pub use http_error::{
    is_http_client_error, parse_http_error, HttpClientError, HttpErrorInfo, HttpResponseInfo,
};
pub use number::{format_currency, is_number};
pub use object::{deep_clone, deep_equal, get_prop, get_prop_or, is_empty_object};
pub use string::{capitalize, to_kebab_case, truncate, truncate_with};
pub use validation::{is_email, is_password_strong, is_valid_url, password_strength, PasswordStrength};
